// Core pipeline logic module

pub mod normalize;
pub mod ordering;
pub mod passwords;
pub mod source;
pub mod twofa;
pub mod word_filter;
pub mod writer;

// Re-export commonly used items
pub use normalize::{normalize_entry, normalize_text, MIN_ENTRY_LEN};
pub use ordering::{merge_entries, order_entries};
pub use passwords::{build_password_list, generate_password_list, PasswordListConfig};
pub use source::{Fetcher, Source};
pub use twofa::{build_domain_list, generate_domain_list, DomainListConfig};
pub use word_filter::{filter_file, FilterStats, MatchMode};
pub use writer::{render_lines, write_lines};
