pub mod style;

pub use style::{motion_tokens_for, FontWeight, MotionTokens, REDUCED_MOTION, STANDARD_MOTION};
