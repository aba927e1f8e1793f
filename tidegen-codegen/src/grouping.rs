//! Partitioning of keywords into first-character groups.

use eyre::{Result, bail, ensure};

/// Keywords sharing a first character, in sorted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyGroup {
    pub key: char,
    pub members: Vec<String>,
}

/// Sort `keywords` and split them into groups by first character.
///
/// Groups come out in strictly increasing key order and their members,
/// concatenated, equal the sorted input. Duplicates are kept. Error
/// positions index the sorted list.
pub fn group_keywords<S: AsRef<str>>(keywords: &[S]) -> Result<Vec<KeyGroup>> {
    ensure!(!keywords.is_empty(), "keyword list is empty");

    let mut sorted: Vec<&str> = keywords.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();

    let mut groups: Vec<KeyGroup> = Vec::new();
    for (index, keyword) in sorted.into_iter().enumerate() {
        let Some(key) = keyword.chars().next() else {
            bail!("keyword at position {} is empty", index);
        };

        match groups.last_mut() {
            Some(group) if group.key == key => group.members.push(keyword.to_string()),
            _ => groups.push(KeyGroup {
                key,
                members: vec![keyword.to_string()],
            }),
        }
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(keys: &[&str]) -> Vec<KeyGroup> {
        group_keywords(keys).unwrap()
    }

    fn kg(key: char, members: &[&str]) -> KeyGroup {
        KeyGroup {
            key,
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn test_groups_sorted_keywords() {
        assert_eq!(
            group(&["if", "import", "is", "app"]),
            vec![kg('a', &["app"]), kg('i', &["if", "import", "is"])]
        );
    }

    #[test]
    fn test_single_keyword() {
        assert_eq!(group(&["while"]), vec![kg('w', &["while"])]);
    }

    #[test]
    fn test_every_keyword_its_own_group() {
        assert_eq!(
            group(&["c", "a", "b"]),
            vec![kg('a', &["a"]), kg('b', &["b"]), kg('c', &["c"])]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        assert_eq!(group(&["if", "if"]), vec![kg('i', &["if", "if"])]);
    }

    #[test]
    fn test_uppercase_sorts_before_lowercase() {
        assert_eq!(
            group(&["tide", "Tide", "true"]),
            vec![kg('T', &["Tide"]), kg('t', &["tide", "true"])]
        );
    }

    #[test]
    fn test_multibyte_first_character() {
        assert_eq!(
            group(&["ünd", "über", "and"]),
            vec![kg('a', &["and"]), kg('ü', &["über", "ünd"])]
        );
    }

    #[test]
    fn test_keys_strictly_increase_and_members_concat_to_sorted_input() {
        let input = [
            "while", "var", "if", "import", "is", "in", "fn", "for", "false", "return", "app",
        ];
        let groups = group_keywords(&input).unwrap();

        assert!(groups.windows(2).all(|w| w[0].key < w[1].key));
        assert!(groups.iter().all(|g| !g.members.is_empty()));
        assert!(
            groups
                .iter()
                .all(|g| g.members.iter().all(|m| m.starts_with(g.key)))
        );

        let mut sorted = input.to_vec();
        sorted.sort();
        let flattened: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.members.iter().map(String::as_str))
            .collect();
        assert_eq!(flattened, sorted);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let err = group_keywords::<&str>(&[]).unwrap_err();
        assert_eq!(err.to_string(), "keyword list is empty");
    }

    #[test]
    fn test_empty_keyword_is_an_error() {
        let err = group_keywords(&["if", ""]).unwrap_err();
        assert_eq!(err.to_string(), "keyword at position 0 is empty");
    }

    #[test]
    fn test_accepts_owned_strings() {
        let owned = vec!["b".to_string(), "a".to_string()];
        let groups = group_keywords(owned.as_slice()).unwrap();
        assert_eq!(groups[0].key, 'a');
        assert_eq!(groups[1].members, ["b".to_string()]);
    }
}
