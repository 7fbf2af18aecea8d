//! # Encoder IO
//!
//! Fitted encoder state is saved as a small JSON document:
//!
//! ```json
//! {"dtype":"str","order":"first_seen","keys":["a","b","c"]}
//! ```
//!
//! Codes are positions in `keys`.

mod json_io;

pub use json_io::*;
