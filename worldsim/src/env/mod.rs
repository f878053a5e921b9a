//! Sector actions: doors, platforms, moving floors and ceilings, light
//! effects, switches and teleporters, plus the trigger dispatch that maps
//! line and sector special numbers onto them.
//!
//! Every mover is a thinker that owns one sector via `specialdata` and
//! moves its plane a speed step per tick through `specials::move_plane`.

pub mod ceiling;
pub mod doors;
pub mod floor;
pub mod lights;
pub mod platforms;
pub(crate) mod specials;
pub(crate) mod switch;
pub(crate) mod teleport;
