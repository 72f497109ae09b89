use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const KNOWN_LIMITS: &[&str] = &[
    "core",
    "cpu",
    "data",
    "fsize",
    "locks",
    "memlock",
    "msgqueue",
    "nice",
    "nofile",
    "nproc",
    "rss",
    "rtprio",
    "rttime",
    "sigpending",
    "stack",
];

/// A named resource limit with soft and hard values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ulimit {
    pub name: String,
    pub soft: i64,
    pub hard: i64,
}

impl Ulimit {
    /// Parse `name=soft[:hard]`. The hard limit defaults to the soft one.
    pub fn parse(val: &str) -> Result<Self, TypesError> {
        let (name, limits) = val.split_once('=').ok_or_else(|| {
            TypesError::InvalidUlimit(format!("invalid ulimit argument: {}", val))
        })?;

        if !KNOWN_LIMITS.contains(&name) {
            return Err(TypesError::InvalidUlimit(format!(
                "invalid ulimit type: {}",
                name
            )));
        }

        let (soft, hard) = match limits.split_once(':') {
            Some((soft, hard)) => (parse_limit(soft)?, parse_limit(hard)?),
            None => {
                let soft = parse_limit(limits)?;
                (soft, soft)
            }
        };

        if soft > hard {
            return Err(TypesError::InvalidUlimit(format!(
                "ulimit soft limit must be less than or equal to hard limit: {} > {}",
                soft, hard
            )));
        }

        Ok(Self {
            name: name.to_string(),
            soft,
            hard,
        })
    }
}

fn parse_limit(value: &str) -> Result<i64, TypesError> {
    value
        .parse()
        .map_err(|_| TypesError::InvalidUlimit(format!("invalid ulimit value: {}", value)))
}

impl FromStr for Ulimit {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulimit::parse(s)
    }
}

impl std::fmt::Display for Ulimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}:{}", self.name, self.soft, self.hard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_soft_and_hard() {
        let u = Ulimit::parse("nofile=1024:2048").unwrap();
        assert_eq!(u.name, "nofile");
        assert_eq!(u.soft, 1024);
        assert_eq!(u.hard, 2048);
        assert_eq!(u.to_string(), "nofile=1024:2048");
    }

    #[test]
    fn test_parse_soft_only() {
        let u: Ulimit = "nproc=512".parse().unwrap();
        assert_eq!(u.soft, 512);
        assert_eq!(u.hard, 512);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Ulimit::parse("nofile").is_err());
        assert!(Ulimit::parse("bogus=1:2").is_err());
        assert!(Ulimit::parse("nofile=abc").is_err());
        assert!(Ulimit::parse("nofile=2048:1024").is_err());
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&Ulimit::parse("stack=8192").unwrap()).unwrap();
        assert_eq!(json, r#"{"Name":"stack","Soft":8192,"Hard":8192}"#);
    }
}
