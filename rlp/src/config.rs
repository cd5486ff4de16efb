//! Configuration of [crate::Output].

/// Initial capacities of the internal arrays of an [crate::Output].
///
/// All arrays grow on demand, so these values only control how many items, lists, and
/// nesting levels can be written before the first reallocation.
///
/// # Examples
///
/// ```
/// use tessera_rlp::{Config, Output};
///
/// // A builder for a deeply nested structure
/// let mut output = Output::with_config(Config {
///     depth: 16,
///     ..Config::default()
/// });
/// for _ in 0..16 {
///     output.start_list().unwrap();
/// }
/// for _ in 0..16 {
///     output.end_list().unwrap();
/// }
/// assert_eq!(output.encoded_size().unwrap(), 16);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Config {
    /// Number of values and list markers in the item record.
    pub items: usize,

    /// Number of entries in the payload-size table (including the root context).
    pub lists: usize,

    /// Number of simultaneously open lists (including the root context).
    pub depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items: 16,
            lists: 8,
            depth: 4,
        }
    }
}
