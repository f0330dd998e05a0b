mod headered_card;
mod icon;

pub use self::headered_card::*;
pub use self::icon::*;
