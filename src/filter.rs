use crate::api::Departure;

impl Departure {
    /// Same category (case-sensitive) and a start date strictly after `start_date`.
    ///
    /// Dates are ISO `YYYY-MM-DD`, so string order is date order.
    pub fn matches(&self, category: &str, start_date: &str) -> bool {
        self.category == category && self.start_date.as_str() > start_date
    }
}

pub fn filter_departures(
    departures: impl IntoIterator<Item = Departure>,
    category: &str,
    start_date: &str,
) -> Vec<Departure> {
    departures
        .into_iter()
        .filter(|departure| departure.matches(category, start_date))
        .collect()
}
