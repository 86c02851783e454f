pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_API_KEY, TEST_IMAGE_MODEL, TEST_PNG, TEST_TEXT_MODEL},
        fixtures::{fortune, gemini},
        TestBuilder, TestContext, TestError,
    };
}
