//! Demo transaction set loaded into the store at startup so a fresh
//! install has something to chart.

use shared::{Mood, TimeOfDay, Transaction};

fn tx(
    id: &str,
    date: &str,
    time_of_day: TimeOfDay,
    mood: Mood,
    category: &str,
    amount: f64,
    recommendation: &str,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: date.to_string(),
        time_of_day,
        mood,
        category: category.to_string(),
        amount,
        recommendation: recommendation.to_string(),
    }
}

pub fn demo_transactions() -> Vec<Transaction> {
    use Mood::*;
    use TimeOfDay::*;
    vec![
        tx("1", "10/29/2025", Morning, Happy, "Coffee", 120.0,
            "Relax spending. Enjoy the day, but track your expenses."),
        tx("2", "10/29/2025", Afternoon, Stressed, "Online Shopping", 4500.0,
            "Pause and reflect. Is this purchase necessary?"),
        tx("3", "10/29/2025", Evening, Sad, "Takeout Food", 600.0,
            "Practice mindful spending. Consider a home-cooked meal."),
        tx("4", "10/29/2025", Evening, Neutral, "Groceries", 2000.0,
            "Good job on your budget! Keep it up."),
        tx("5", "10/30/2025", Morning, Neutral, "Coffee", 100.0,
            "Keep following your budget today."),
        tx("6", "10/30/2025", Afternoon, Anxious, "Online Shopping", 7000.0,
            "High-alert: Emotional spending detected. Redirect funds to savings."),
        tx("7", "10/30/2025", Evening, Neutral, "Entertainment", 400.0,
            "Consider low-cost alternatives, like free streaming services."),
        tx("8", "10/31/2025", Morning, Happy, "Breakfast", 250.0,
            "Celebrate within your budget."),
        tx("9", "10/31/2025", Afternoon, Stressed, "Impulse Buy", 1800.0,
            "Stop and reassess. Is there a less expensive way to cope?"),
        tx("10", "10/31/2025", Evening, Happy, "Dinner Out", 2500.0,
            "Enjoy your special occasion. Make a plan to balance the budget tomorrow."),
        tx("11", "11/01/2025", Morning, Tired, "Coffee", 120.0,
            "Mind your budget today. Maybe switch to making coffee at home."),
        tx("12", "11/01/2025", Afternoon, Sad, "Snacks", 150.0,
            "Avoid idle spending. Explore free activities to occupy your time."),
        tx("13", "11/01/2025", Evening, Neutral, "Savings", 2000.0,
            "Excellent! Your calm mood is boosting your financial health."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_ids_are_unique() {
        let transactions = demo_transactions();
        let mut ids: Vec<&str> = transactions.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), transactions.len());
    }
}
