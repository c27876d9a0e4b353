use console::Style;
use horizon_core::pipeline::config::GalleryConfig;
use horizon_core::pipeline::{CycleReport, SourceOutcome};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
    failed: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
            failed: Style::new().red(),
        }
    }
}

pub fn print_cycle_summary(config: &GalleryConfig, source_name: &str) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Horizon Gallery"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(15)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Source"),
        s.method.apply_to(format!("{} [{}]", config.source, source_name))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output_dir.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Stations"),
        s.value.apply_to(config.source_ids.len())
    );
    println!();

    println!("  {}", s.header.apply_to("Leveling"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Panels"),
        s.value.apply_to(config.panel_count)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Blank at"),
        s.value.apply_to(format!("{:.0}%", config.blank_threshold * 100.0))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Canny"),
        s.value.apply_to(format!(
            "{} / {}",
            config.alignment.canny_low, config.alignment.canny_high
        ))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Votes"),
        s.value.apply_to(config.alignment.vote_threshold)
    );
    match config.frame_timeout_ms {
        Some(ms) => println!(
            "    {:<12}{}",
            s.label.apply_to("Timeout"),
            s.value.apply_to(format!("{ms} ms"))
        ),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to("Timeout"),
            s.disabled.apply_to("none")
        ),
    }
    println!();
}

pub fn print_cycle_report(report: &CycleReport) {
    let s = Styles::new();

    println!();
    println!("  {}", s.header.apply_to("Stations"));
    for (id, outcome) in &report.outcomes {
        let style = match outcome {
            SourceOutcome::Accepted => &s.method,
            SourceOutcome::Blank => &s.disabled,
            SourceOutcome::Unavailable(_) | SourceOutcome::Failed(_) | SourceOutcome::TimedOut => {
                &s.failed
            }
        };
        println!("    {:<12}{}", s.label.apply_to(id), style.apply_to(outcome));
    }
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Accepted"),
        s.value.apply_to(format!(
            "{} of {}",
            report.accepted_count(),
            report.outcomes.len()
        ))
    );
    if let Some(ref gallery) = report.gallery {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Gallery"),
            s.value.apply_to(format!("{}x{}", gallery.width(), gallery.height()))
        );
    }
}
