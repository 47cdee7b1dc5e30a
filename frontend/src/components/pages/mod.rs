//! Static educational content. These views hold no state and send no
//! messages; they render once per navigation.

pub mod about_diabetes;
pub mod causes_effects;
pub mod diabetes_types;
