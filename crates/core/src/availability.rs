//! Availability classification for a movie in search listings.

use serde::Serialize;

use crate::types::DbId;

/// Whether a movie can be rented right now, from one customer's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// No OPEN rental exists for the movie.
    Available,
    /// The viewing customer holds the OPEN rental.
    YouHaveIt,
    /// Another customer holds the OPEN rental.
    Unavailable,
}

/// Classify a movie given its current holder (at most one exists, per the
/// single-renter invariant) and the customer doing the asking.
pub fn classify(holder: Option<DbId>, viewer: DbId) -> Availability {
    match holder {
        None => Availability::Available,
        Some(cid) if cid == viewer => Availability::YouHaveIt,
        Some(_) => Availability::Unavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_holder_is_available() {
        assert_eq!(classify(None, 7), Availability::Available);
    }

    #[test]
    fn test_viewer_holds_it() {
        assert_eq!(classify(Some(7), 7), Availability::YouHaveIt);
    }

    #[test]
    fn test_other_customer_holds_it() {
        assert_eq!(classify(Some(7), 9), Availability::Unavailable);
    }
}
