use super::aggregate::Client;
use crate::domain::common::ymd;
use chrono::NaiveDate;

fn client(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    total_reservations: u32,
    last_visit: NaiveDate,
) -> Client {
    Client {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        total_reservations,
        last_visit,
    }
}

pub(crate) fn clients() -> Vec<Client> {
    vec![
        client("client-001", "Marie Laurent", "marie.laurent@email.com", "+509 3456-7890", 5, ymd(2025, 11, 1)),
        client("client-002", "Pierre Toussaint", "pierre.t@email.com", "+509 4567-8901", 3, ymd(2025, 10, 28)),
        client("client-003", "Sophie Michel", "sophie.michel@email.com", "+509 5678-9012", 8, ymd(2025, 11, 2)),
        client("client-004", "Jacques Bernard", "jacques.b@email.com", "+509 6789-0123", 2, ymd(2025, 10, 25)),
        client("client-005", "Jean Dupont", "jean.dupont@email.com", "+509 7890-1234", 1, ymd(2025, 10, 20)),
    ]
}
