pub mod client;
pub mod record;
pub mod store;

pub use client::SupabaseStore;
pub use record::{
    document_from_external_id, NotificationPayload, NotificationRecord, ReviewAnswer,
    VERIFICATION_TYPE_COMPANY,
};
pub use store::NotificationStore;
