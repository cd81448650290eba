//! Classification of the `sharded` deployment field.
//!
//! The field is an awkward union of three shapes and is kept as a raw
//! JSON value until it reaches [`ShardingTopology::classify`]:
//!
//! - absent or `null`: a plain replica set;
//! - a single-element array holding one numeric string (`["3"]`): a
//!   shard *count*, names to be synthesized later;
//! - any other array of strings: explicit shard *names*, order
//!   preserved.
//!
//! The count form wins ties: a sole all-digit string is always a count,
//! so a single shard can never be literally named `"3"`.

use serde_json::Value;

use crate::core::ShardSpecError;

/// Resolved interpretation of the `sharded` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShardingTopology {
    /// Plain replica set: no shards, no mongos tier.
    Unsharded,
    /// Sharded with a requested number of shards; names get synthesized.
    ByCount(usize),
    /// Sharded with explicitly named shards, in the given order.
    ByName(Vec<String>),
}

impl ShardingTopology {
    /// Classify a raw `sharded` value, rejecting malformed shapes.
    pub fn classify(field: Option<&Value>) -> Result<Self, ShardSpecError> {
        let value = match field {
            None | Some(Value::Null) => return Ok(Self::Unsharded),
            Some(value) => value,
        };

        let items = value
            .as_array()
            .ok_or_else(|| ShardSpecError::NotAList(value.clone()))?;

        if items.is_empty() {
            return Err(ShardSpecError::EmptyList);
        }

        let mut names = Vec::with_capacity(items.len());
        for item in items {
            match item.as_str() {
                Some(name) => names.push(name.to_string()),
                None => return Err(ShardSpecError::NonStringMembers(value.clone())),
            }
        }

        // A sole all-digit string is a count, never a name.
        if names.len() == 1 && is_digit_string(&names[0]) {
            let count = names[0]
                .parse::<usize>()
                .ok()
                .filter(|count| *count > 0)
                .ok_or_else(|| ShardSpecError::InvalidCount(names[0].clone()))?;
            return Ok(Self::ByCount(count));
        }

        Ok(Self::ByName(names))
    }

    pub fn is_sharded(&self) -> bool {
        !matches!(self, Self::Unsharded)
    }

    /// Number of shards, or `None` for a plain replica set.
    pub fn shard_count(&self) -> Option<usize> {
        match self {
            Self::Unsharded => None,
            Self::ByCount(count) => Some(*count),
            Self::ByName(names) => Some(names.len()),
        }
    }
}

/// True for a non-empty string of ASCII decimal digits.
fn is_digit_string(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_field_is_unsharded() {
        let topology = ShardingTopology::classify(None).unwrap();
        assert_eq!(topology, ShardingTopology::Unsharded);
        assert!(!topology.is_sharded());
        assert_eq!(topology.shard_count(), None);
    }

    #[test]
    fn test_null_field_is_unsharded() {
        let topology = ShardingTopology::classify(Some(&Value::Null)).unwrap();
        assert_eq!(topology, ShardingTopology::Unsharded);
    }

    #[test]
    fn test_digit_string_is_a_count() {
        let value = json!(["3"]);
        let topology = ShardingTopology::classify(Some(&value)).unwrap();
        assert_eq!(topology, ShardingTopology::ByCount(3));
        assert_eq!(topology.shard_count(), Some(3));
    }

    #[test]
    fn test_leading_zeros_still_parse_as_count() {
        let value = json!(["03"]);
        let topology = ShardingTopology::classify(Some(&value)).unwrap();
        assert_eq!(topology, ShardingTopology::ByCount(3));
    }

    #[test]
    fn test_named_shards_preserve_order() {
        let value = json!(["beta", "alpha"]);
        let topology = ShardingTopology::classify(Some(&value)).unwrap();
        assert_eq!(
            topology,
            ShardingTopology::ByName(vec!["beta".to_string(), "alpha".to_string()])
        );
        assert_eq!(topology.shard_count(), Some(2));
    }

    #[test]
    fn test_single_non_numeric_name_is_a_name() {
        let value = json!(["shardA"]);
        let topology = ShardingTopology::classify(Some(&value)).unwrap();
        assert_eq!(
            topology,
            ShardingTopology::ByName(vec!["shardA".to_string()])
        );
    }

    #[test]
    fn test_single_digit_string_is_always_a_count() {
        // Two all-digit names work; one collapses into the count form.
        let pair = json!(["3", "4"]);
        assert_eq!(
            ShardingTopology::classify(Some(&pair)).unwrap(),
            ShardingTopology::ByName(vec!["3".to_string(), "4".to_string()])
        );

        let single = json!(["3"]);
        assert_eq!(
            ShardingTopology::classify(Some(&single)).unwrap(),
            ShardingTopology::ByCount(3)
        );
    }

    #[test]
    fn test_non_ascii_digits_are_a_name() {
        // Only ASCII decimal digits trigger the count form.
        let value = json!(["３"]);
        assert_eq!(
            ShardingTopology::classify(Some(&value)).unwrap(),
            ShardingTopology::ByName(vec!["３".to_string()])
        );
    }

    #[test]
    fn test_empty_string_is_a_name() {
        let value = json!([""]);
        assert_eq!(
            ShardingTopology::classify(Some(&value)).unwrap(),
            ShardingTopology::ByName(vec![String::new()])
        );
    }

    #[test]
    fn test_non_list_value_is_rejected() {
        let value = json!(5);
        let err = ShardingTopology::classify(Some(&value)).unwrap_err();
        assert!(matches!(err, ShardSpecError::NotAList(_)));
        assert_eq!(
            err.to_string(),
            "Invalid 'sharded' value (not null or list): 5"
        );
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let value = json!([]);
        let err = ShardingTopology::classify(Some(&value)).unwrap_err();
        assert!(matches!(err, ShardSpecError::EmptyList));
        assert_eq!(err.to_string(), "Invalid 'sharded' value: empty array");
    }

    #[test]
    fn test_mixed_member_types_are_rejected() {
        let value = json!(["abc", 3]);
        let err = ShardingTopology::classify(Some(&value)).unwrap_err();
        assert!(matches!(err, ShardSpecError::NonStringMembers(_)));
        assert_eq!(
            err.to_string(),
            "Invalid 'sharded' value: list must contain only strings (got: [\"abc\",3])"
        );
    }

    #[test]
    fn test_zero_count_is_rejected() {
        let value = json!(["0"]);
        let err = ShardingTopology::classify(Some(&value)).unwrap_err();
        assert!(matches!(err, ShardSpecError::InvalidCount(_)));
        assert_eq!(err.to_string(), "Invalid shard count in 'sharded': \"0\"");
    }

    #[test]
    fn test_all_zero_digits_count_is_rejected() {
        let value = json!(["00"]);
        let err = ShardingTopology::classify(Some(&value)).unwrap_err();
        assert!(matches!(err, ShardSpecError::InvalidCount(_)));
    }

    #[test]
    fn test_overflowing_count_is_rejected_not_a_crash() {
        let value = json!(["99999999999999999999999999"]);
        let err = ShardingTopology::classify(Some(&value)).unwrap_err();
        assert!(matches!(err, ShardSpecError::InvalidCount(_)));
    }

    #[test]
    fn test_is_digit_string() {
        assert!(is_digit_string("3"));
        assert!(is_digit_string("150"));
        assert!(is_digit_string("03"));
        assert!(!is_digit_string(""));
        assert!(!is_digit_string("3a"));
        assert!(!is_digit_string("-3"));
        assert!(!is_digit_string(" 3"));
    }
}
