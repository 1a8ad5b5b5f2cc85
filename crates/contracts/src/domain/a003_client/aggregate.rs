use crate::shared::filter::Searchable;
use crate::shared::format::initials;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Guest profile with visit history counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub total_reservations: u32,
    pub last_visit: NaiveDate,
}

impl Client {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

impl Searchable for Client {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.phone.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ymd;

    fn client(name: &str) -> Client {
        Client {
            id: "client-x".into(),
            name: name.into(),
            email: "x@email.com".into(),
            phone: "+509 0000-0000".into(),
            total_reservations: 0,
            last_visit: ymd(2025, 11, 1),
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(client("Marie Laurent").initials(), "ML");
        assert_eq!(client("jean baptiste dupont").initials(), "JB");
        assert_eq!(client("Cher").initials(), "C");
        assert_eq!(client("").initials(), "");
    }
}
