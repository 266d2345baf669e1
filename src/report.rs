use crate::core::{Process, Subject, Timeline};
use crate::sim::Summary;

fn subject_label(subject: Subject) -> String {
    match subject {
        Subject::Idle => "IDLE".to_string(),
        Subject::Proc(pid) => format!("P{pid}"),
    }
}

/// The canonical process set, before any policy has touched it.
pub fn render_workload(procs: &[Process]) -> String {
    let mut out = String::from("Canonical process set\n");
    out.push_str(&format!(
        "{:>5} {:>8} {:>6} {:>9}\n",
        "PID", "Arrival", "Burst", "Priority"
    ));
    for p in procs {
        out.push_str(&format!(
            "{:>5} {:>8} {:>6} {:>9}\n",
            p.pid, p.arrival, p.burst, p.priority
        ));
    }
    out
}

/// Per-policy metrics table with 2-decimal averages.
pub fn render_table(title: &str, summary: &Summary) -> String {
    let mut out = format!("[{title}]\n");
    out.push_str(&format!(
        "{:>5} {:>8} {:>6} {:>9} {:>6} {:>11} {:>8} {:>11}\n",
        "PID", "Arrival", "Burst", "Priority", "Start", "Completion", "Waiting", "Turnaround"
    ));
    for r in &summary.rows {
        out.push_str(&format!(
            "{:>5} {:>8} {:>6} {:>9} {:>6} {:>11} {:>8} {:>11}\n",
            r.pid, r.arrival, r.burst, r.priority, r.started, r.completion, r.waiting, r.turnaround
        ));
    }
    out.push_str(&format!(
        "Average waiting time    : {:.2}\n",
        summary.avg_waiting
    ));
    out.push_str(&format!(
        "Average turnaround time : {:.2}\n",
        summary.avg_turnaround
    ));
    out
}

/// Compressed Gantt strip: one cell per merged segment, boundary ticks
/// underneath.
pub fn render_gantt(title: &str, timeline: &Timeline) -> String {
    let mut out = format!(">>> Gantt Chart: {title}\n");
    let merged = timeline.merged();
    if merged.is_empty() {
        out.push_str("(empty timeline)\n");
        return out;
    }

    for seg in &merged {
        out.push_str(&format!("| {:<5}", subject_label(seg.subject)));
    }
    out.push_str("|\n");

    out.push_str(&format!("{:<7}", merged[0].start));
    for seg in &merged {
        out.push_str(&format!("{:<7}", seg.end));
    }
    out.push('\n');
    out
}
