/// Read one line of source from the interactive prompt. `None` when the
/// prompt is cancelled or interrupted.
pub fn read_source_line() -> Option<String> {
    inquire::Text::new("tala >")
        .with_render_config(prompt_render_config())
        .prompt()
        .ok()
}

fn prompt_render_config() -> inquire::ui::RenderConfig<'static> {
    inquire::ui::RenderConfig::default().with_canceled_prompt_indicator(
        inquire::ui::Styled::new("<exit>").with_fg(inquire::ui::Color::DarkYellow),
    )
}
