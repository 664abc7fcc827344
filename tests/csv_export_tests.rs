use graph_widget::core::Point;
use graph_widget::export::{export_csv, write_csv};

fn sample_points() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.2),
        Point::new(10.0, 0.4),
        Point::new(25.5, 0.6),
        Point::new(0.1 + 0.2, 1e-9),
    ]
}

#[test]
fn csv_layout_is_title_header_then_rows() {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, "Reaction Rate", &sample_points()).expect("write");

    let text = String::from_utf8(buffer).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Reaction Rate");
    assert_eq!(lines[1], "X,Y");
    assert_eq!(lines[2], "0,0.2");
    assert_eq!(lines.len(), 2 + sample_points().len());
}

#[test]
fn csv_round_trip_reconstructs_the_series() {
    let points = sample_points();
    let mut buffer = Vec::new();
    write_csv(&mut buffer, "Round Trip", &points).expect("write");

    let text = String::from_utf8(buffer).expect("utf8");
    let parsed: Vec<Point> = text
        .lines()
        .skip(2)
        .map(|line| {
            let (x, y) = line.split_once(',').expect("two columns");
            Point::new(x.parse().expect("x"), y.parse().expect("y"))
        })
        .collect();

    assert_eq!(parsed, points);
}

#[test]
fn export_writes_file_named_after_the_title() {
    let dir = std::env::temp_dir();
    let title = format!("graph-widget-export-{}", std::process::id());

    let path = export_csv(&dir, &title, &sample_points()).expect("export");
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some(format!("{title}.csv").as_str())
    );

    let text = std::fs::read_to_string(&path).expect("read back");
    assert!(text.starts_with(&title));
    std::fs::remove_file(&path).expect("cleanup");
}

#[test]
fn export_to_missing_directory_surfaces_the_io_error() {
    let dir = std::env::temp_dir().join("graph-widget-does-not-exist");
    assert!(export_csv(&dir, "t", &sample_points()).is_err());
}
