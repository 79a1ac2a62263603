// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language metadata for tran.
//!
//! Holds the static ISO 639-1 table and host locale detection. Everything
//! here is offline; lookups that may fall back to the endpoint live in
//! [`crate::resolver`].
//!
//! ## Lookup rules
//!
//! | Input      | Matched against          | Example               |
//! |------------|--------------------------|-----------------------|
//! | `lookup_code`   | two-letter code, any case | `"JA"` -> Japanese |
//! | `lookup_name`   | first name containing it  | `"frisia"` -> Western Frisian |
//! | `list_contains` | code or name              | `"en"` -> English, Armenian, ... |

mod iso639;
mod locale;

pub use iso639::{all, list_contains, lookup_code, lookup_name, Language};
pub use locale::{current_lang, language_from_locale};
