use crate::app::App;
use planner_core::Priority;

/// Seed three tasks for today and two for tomorrow.
pub fn seed(app: &mut App) {
    let today = app.today();
    let tomorrow = today.next_day().unwrap_or(today);

    let entries = [
        ("Finish the project report", Priority::High, Some("09:00"), today, true),
        ("Team meeting", Priority::Medium, Some("14:00"), today, false),
        ("Read technical documentation", Priority::Low, None, today, false),
        ("Workout", Priority::Medium, Some("18:00"), tomorrow, true),
        ("Learn a new skill", Priority::High, None, tomorrow, false),
    ];

    for (title, priority, time, date, completed) in entries {
        if let Some(task) = app.add_task(title, priority, time, date) {
            if completed {
                app.toggle_task(task.id);
            }
        }
    }
}
