//! 用户数据模型

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    pub id: i64,
    #[serde(deserialize_with = "crate::core::strict::string")]
    pub name: String,
    #[serde(deserialize_with = "crate::core::strict::string")]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_text_fields_reject_other_scalars() {
        for yaml in [
            "- id: 1\n  name: 123\n  email: a@example.com\n",
            "- id: 1\n  name: Hubert\n  email: true\n",
            "- id: 1\n  name: ~\n  email: a@example.com\n",
        ] {
            let result: Result<Vec<User>, _> = serde_yaml_bw::from_str(yaml);
            assert!(result.is_err(), "{}", yaml);
        }
    }

    #[test]
    fn test_user_quoted_number_is_string() {
        let yaml = "- id: 1\n  name: \"123\"\n  email: a@example.com\n";
        let users: Vec<User> = serde_yaml_bw::from_str(yaml).unwrap();
        assert_eq!(users[0].name, "123");
        assert_eq!(users[0].email, "a@example.com");
    }
}
