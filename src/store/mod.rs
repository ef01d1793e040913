pub mod assets;
pub mod error;
pub mod fixtures;
pub mod supabase;
pub mod traits;

pub use assets::{AssetStore, ImageUpload, SupabaseAssets};
pub use error::{RecordKind, StoreError};
pub use supabase::{StoreConfig, SupabaseStore};
pub use traits::RecordStore;
