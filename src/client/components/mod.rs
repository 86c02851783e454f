pub mod header;
pub mod input_form;
pub mod loading;
pub mod notice;
pub mod page;
pub mod result_view;

pub use header::SiteHeader;
pub use input_form::InputForm;
pub use loading::LoadingOverlay;
pub use notice::FailureNotice;
pub use page::Page;
pub use result_view::ResultView;
