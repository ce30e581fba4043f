//! Room file format and room set storage for roomcrawl.
//!
//! - **Codec** ([`RoomCodec`] trait, [`TextCodec`]): converts rooms to
//!   and from the line-oriented room file format.
//! - **Store** ([`RoomStore`]): writes a room set as a directory of room
//!   files and finds the most recent one again.
//! - **Errors** ([`CodecError`], [`StoreError`]).
//!
//! A room file looks like this:
//!
//! ```text
//! ROOM NAME: Lion
//! CONNECTION 1: Wolf
//! CONNECTION 2: Hawk
//! CONNECTION 3: Bear
//! ROOM TYPE: START_ROOM
//! ```

mod codec;
mod error;
mod store;

pub use codec::{RoomCodec, TextCodec};
pub use error::{CodecError, StoreError};
pub use store::{RoomStore, StoreConfig};
