use super::*;
use crate::helpers::*;
use std::sync::{Arc, Mutex};

const INSTANCE_CONTENT: &str = "0;0;100\n10;0;200\n10;10;300\n0;10;400\n";

fn create_logger() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let sink = messages.clone();

    let logger: InfoLogger = Arc::new(move |msg: &str| sink.lock().unwrap().push(msg.to_string()));

    (logger, messages)
}

#[test]
fn can_create_figure_for_single_file() {
    let dir = tempfile::tempdir().unwrap();
    let tour_path = write_test_file(dir.path(), "cycle.txt", "0\n1\n2\n3\n");
    let plotter = TspPlotter::new(create_square_instance());

    let figure = plotter.create_figure(tour_path.as_path()).expect("cannot create figure");

    assert_eq!(figure.panels.len(), 1);
    assert_eq!(figure.panels[0].title, "cycle");
    assert_eq!(figure.panels[0].segments.len(), 4);
}

#[test]
fn can_create_figure_for_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_test_file(dir.path(), "b_nn.txt", "0\n2\n1\n3\n");
    write_test_file(dir.path(), "a_cycle.txt", "0\n1\n2\n3\n");
    write_test_file(dir.path(), "c_half.txt", "3\n0\n");
    write_test_file(dir.path(), "readme.md", "ignored");
    let plotter = TspPlotter::new(create_square_instance());

    let figure = plotter.create_figure(dir.path()).expect("cannot create figure");

    let titles = figure.panels.iter().map(|panel| panel.title.as_str()).collect::<Vec<_>>();
    assert_eq!(titles, vec!["a_cycle", "b_nn", "c_half"]);
    assert_eq!(figure.size, (3 * 750, 750));
}

#[test]
fn can_produce_same_layout_on_rerun() {
    let dir = tempfile::tempdir().unwrap();
    write_test_file(dir.path(), "first.txt", "0\n1\n2\n3\n");
    write_test_file(dir.path(), "second.txt", "3\n2\n1\n0\n");
    let plotter = TspPlotter::new(create_square_instance());

    let figure_a = plotter.create_figure(dir.path()).unwrap();
    let figure_b = plotter.create_figure(dir.path()).unwrap();

    assert_eq!(figure_a, figure_b);
}

#[test]
fn can_log_progress_and_incomplete_tours() {
    let dir = tempfile::tempdir().unwrap();
    write_test_file(dir.path(), "full.txt", "0\n1\n2\n3\n");
    write_test_file(dir.path(), "half.txt", "0\n2\n");
    let (logger, messages) = create_logger();
    let plotter = TspPlotter::new(create_square_instance()).with_logger(logger);

    plotter.create_figure(dir.path()).expect("cannot create figure");

    let messages = messages.lock().unwrap();
    assert_eq!(messages[0], "instance has 4 points");
    assert_eq!(messages[1], format!("found 2 solution(s) in '{}'", dir.path().display()));
    assert_eq!(messages[2], "tour 'half' does not visit every of 4 points exactly once, it has 2 entries");
    assert_eq!(messages.len(), 3);
}

#[test]
fn can_fail_before_writing_for_missing_solution_path() {
    let dir = tempfile::tempdir().unwrap();
    let instance_path = write_test_file(dir.path(), "instance.csv", INSTANCE_CONTENT);
    let output_path = dir.path().join("output.png");

    let result = plot_solutions(dir.path().join("missing").as_path(), output_path.as_path(), instance_path.as_path());

    assert!(result.is_err());
    assert!(!output_path.exists());
}

#[test]
fn can_fail_before_writing_for_out_of_range_index() {
    let dir = tempfile::tempdir().unwrap();
    let instance_path = write_test_file(dir.path(), "instance.csv", INSTANCE_CONTENT);
    let tour_path = write_test_file(dir.path(), "broken.txt", "0\n1\n4\n");
    let output_path = dir.path().join("output.svg");

    let result = plot_solutions(tour_path.as_path(), output_path.as_path(), instance_path.as_path());

    assert_eq!(result, Err("invalid tour 'broken': index 4 is out of range, instance has 4 points".into()));
    assert!(!output_path.exists());
}

#[test]
fn can_fail_for_unsupported_output_format() {
    let dir = tempfile::tempdir().unwrap();
    let tour_path = write_test_file(dir.path(), "cycle.txt", "0\n1\n2\n3\n");
    let output_path = dir.path().join("output.pdf");
    let plotter = TspPlotter::new(create_square_instance());

    let result = plotter.plot(tour_path.as_path(), output_path.as_path());

    assert_eq!(result, Err("unsupported output format: 'pdf'".into()));
    assert!(!output_path.exists());
}

#[test]
fn can_fail_for_missing_instance() {
    let dir = tempfile::tempdir().unwrap();
    let tour_path = write_test_file(dir.path(), "cycle.txt", "0\n1\n2\n3\n");
    let output_path = dir.path().join("output.png");

    let result = plot_solutions(tour_path.as_path(), output_path.as_path(), dir.path().join("missing.csv").as_path());

    let error = result.expect_err("should fail").to_string();
    assert!(error.starts_with("cannot read instance"));
    assert!(!output_path.exists());
}

#[test]
fn can_write_figure_for_directory_of_solutions() {
    let dir = tempfile::tempdir().unwrap();
    let instance_path = write_test_file(dir.path(), "instance.csv", INSTANCE_CONTENT);
    let solutions_dir = dir.path().join("solutions");
    std::fs::create_dir(&solutions_dir).unwrap();
    write_test_file(solutions_dir.as_path(), "cycle.txt", "0\n1\n2\n3\n");
    write_test_file(solutions_dir.as_path(), "reversed.txt", "3\n2\n1\n0\n");
    let output_path = dir.path().join("output.svg");

    let result = plot_solutions(solutions_dir.as_path(), output_path.as_path(), instance_path.as_path());

    assert_eq!(result, Ok(()));
    let content = std::fs::read_to_string(&output_path).expect("cannot read output");
    assert!(content.contains("cycle"));
    assert!(content.contains("reversed"));
}
