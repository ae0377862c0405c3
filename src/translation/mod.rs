/*!
 * Placeholder translation of documents.
 *
 * This module contains the two pieces every language job runs in order:
 *
 * - `table`: translation tables and the loader reading `<lang>.json` files
 * - `substitution`: the matcher replacing delimited placeholders with table values
 */

// Re-export main types for easier usage
pub use self::substitution::{Substitutor, build_pattern, substitute};
pub use self::table::{TranslationLoader, TranslationTable};

// Submodules
pub mod substitution;
pub mod table;
