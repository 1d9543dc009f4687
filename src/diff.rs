use crate::types::Translation;

/// Keys of `default` that `other` lacks, in `default`'s order.
pub fn compare_translations(default: &Translation, other: &Translation) -> Vec<String> {
    default
        .keys()
        .filter(|k| !other.contains_key(k.as_str()))
        .cloned()
        .collect()
}
