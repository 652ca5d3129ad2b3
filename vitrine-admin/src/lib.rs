//! Vitrine Admin - state controllers for the management page
//!
//! UI-agnostic controllers behind the product management screen: the
//! product form (draft + per-field errors), the page controller
//! (collections, filters, modal state, load/mutate/reload cycles), and the
//! transient notice board. Rendering, routing, and modal chrome are the
//! host UI's concern; this crate only exposes the state they read.

pub mod form;
pub mod notice;
pub mod page;

pub use form::{FormMode, ProductForm};
pub use notice::{DEFAULT_NOTICE_TTL, Notice, NoticeBoard, NoticeLevel};
pub use page::{CouponPrompt, DiscountPrompt, PageController};

// Re-export the validation surface the controllers build on
pub use shared::validate::{DraftPolicy, FieldErrors};
