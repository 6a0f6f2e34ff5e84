mod ingredient;
mod instructions;

pub use ingredient::parse_ingredient;
pub use instructions::normalize_instructions;
