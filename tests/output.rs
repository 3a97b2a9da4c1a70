use todone::output::{format_human, HumanOutput};

#[test]
fn format_human_joins_header_and_lines() {
    let mut human = HumanOutput::new("Added task 3: @work Ship it");
    human.push_line("tagged @work");

    let rendered = format_human(&human);
    assert_eq!(rendered, "Added task 3: @work Ship it\ntagged @work");
}

#[test]
fn format_human_of_bare_output_is_just_the_lines() {
    let mut human = HumanOutput::bare();
    human.push_line("  1. One");
    human.push_line("  2. Two");

    assert_eq!(format_human(&human), "  1. One\n  2. Two");
}

#[test]
fn format_human_of_empty_output_is_empty() {
    let human = HumanOutput::bare();
    assert_eq!(format_human(&human), "");
}
