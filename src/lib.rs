//! Serialize filter criteria (a comparison/AND/OR expression tree plus
//! ordering and pagination) into self-describing JSON and rebuild them.
//!
//! ```
//! use criteria_codec::{deserialize, serialize, Criteria};
//! use criteria_codec::expr::{eq, gt};
//!
//! let criteria = Criteria::create()
//!     .and_where(eq("status", "active"))
//!     .and_where(gt("age", 18));
//!
//! let bytes = serialize(&criteria).unwrap();
//! assert_eq!(deserialize(&bytes).unwrap(), criteria);
//! ```

pub mod expr;

pub mod visitor;

pub mod criteria;
pub use criteria::{Criteria, Direction};

pub mod codec;
pub use codec::{deserialize, serialize, ChildPolicy, CodecError, CriteriaSerializer, SerializerConfig};

pub mod matching;
pub use matching::CriteriaMatcher;
