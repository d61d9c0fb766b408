//! Per-mood spending totals for the chart.

use shared::{Mood, MoodSpendingEntry, Transaction};

/// Derive the chart series from the full transaction list: one entry
/// per mood in the fixed display order, moods with zero spend omitted.
/// Pure and recomputed from scratch on every call; linear in the
/// transaction count times the (fixed) mood count.
pub fn mood_spending(transactions: &[Transaction]) -> Vec<MoodSpendingEntry> {
    Mood::ALL
        .iter()
        .filter_map(|mood| {
            let total: f64 = transactions
                .iter()
                .filter(|t| t.mood == *mood)
                .map(|t| t.amount)
                .sum();
            (total > 0.0).then_some(MoodSpendingEntry {
                mood: *mood,
                total_spending: total,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::TimeOfDay;

    fn tx(mood: Mood, amount: f64) -> Transaction {
        Transaction {
            id: format!("{}-{}", mood, amount),
            date: "01/01/2025".to_string(),
            time_of_day: TimeOfDay::Morning,
            mood,
            category: "Test".to_string(),
            amount,
            recommendation: String::new(),
        }
    }

    #[test]
    fn sums_per_mood_in_display_order() {
        let transactions = vec![
            tx(Mood::Tired, 120.0),
            tx(Mood::Happy, 100.0),
            tx(Mood::Happy, 250.0),
            tx(Mood::Sad, 600.0),
        ];
        let entries = mood_spending(&transactions);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].mood, Mood::Happy);
        assert_eq!(entries[0].total_spending, 350.0);
        assert_eq!(entries[1].mood, Mood::Sad);
        assert_eq!(entries[2].mood, Mood::Tired);
    }

    #[test]
    fn zero_spend_moods_never_appear() {
        let transactions = vec![tx(Mood::Happy, 0.0), tx(Mood::Neutral, 10.0)];
        let entries = mood_spending(&transactions);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].mood, Mood::Neutral);
    }

    #[test]
    fn totals_are_conserved() {
        let transactions = vec![
            tx(Mood::Happy, 1.5),
            tx(Mood::Anxious, 2.5),
            tx(Mood::Anxious, 4.0),
        ];
        let chart_total: f64 = mood_spending(&transactions)
            .iter()
            .map(|e| e.total_spending)
            .sum();
        let list_total: f64 = transactions.iter().map(|t| t.amount).sum();
        assert_eq!(chart_total, list_total);
    }

    #[test]
    fn empty_list_yields_empty_chart() {
        assert!(mood_spending(&[]).is_empty());
    }
}
