//! Card components
//!
//! Every card renders through [`CardSurface`], which owns hover state and
//! draws the single root element via [`DioxusRenderer`].

mod frosted_card;
mod glass_card;
mod icon_card;
mod player_card;
mod renderer;
mod surface;
mod trip_card;

pub use frosted_card::*;
pub use glass_card::*;
pub use icon_card::*;
pub use player_card::*;
pub use renderer::*;
pub use surface::*;
pub use trip_card::*;
