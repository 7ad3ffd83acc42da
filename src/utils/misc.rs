use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use term_size::dimensions;

/// Picks a whole number of seconds from `[a, b]`; the bounds may come in either order.
pub fn random_secs(range: [u64; 2]) -> u64 {
    let (low, high) = (range[0].min(range[1]), range[0].max(range[1]));

    rand::thread_rng().gen_range(low..=high)
}

pub async fn pretty_sleep(sleep_range: [u64; 2]) {
    let random_sleep_duration_secs = random_secs(sleep_range);

    if random_sleep_duration_secs == 0 {
        return;
    }

    let pb = ProgressBar::new(random_sleep_duration_secs);

    let term_width = dimensions().map(|(w, _)| w.saturating_sub(2)).unwrap_or(40);
    let bar_width = if term_width > 40 { term_width - 20 } else { 20 };

    let style = ProgressStyle::default_bar()
        .template(&format!(
            "{{spinner:.green}} [{{elapsed_precise}}] [{{bar:{bar_width}.cyan/blue}}] {{pos}}/{{len}}s"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");

    pb.set_style(style);

    let step = std::time::Duration::from_secs(1);

    for _ in 0..random_sleep_duration_secs {
        pb.inc(1);
        tokio::time::sleep(step).await;
    }

    pb.finish_and_clear();
}
