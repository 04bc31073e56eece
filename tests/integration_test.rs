use route_ranker::utils::config::Config;
use route_ranker::utils::yaml;
use route_ranker::Router;

fn run_with(config: Config, input: &str) -> (String, String) {
    let mut router = Router::new(config);
    let (mut out, mut err) = (Vec::new(), Vec::new());
    router.run(input.as_bytes(), &mut out, &mut err).unwrap();
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

fn run(input: &str) -> (String, String) {
    run_with(Config::default(), input)
}

#[test]
fn it_chains_two_legs() {
    let (out, err) = run("ADD A,B,10,5\nADD B,C,5,2\nQUERY A,C\n");
    assert_eq!(out, "EDGE A,B,10,5\nEDGE B,C,5,2\nQUERY A,C\nPATH 435.00,A,B,C\n");
    assert_eq!(err, "");
}

#[test]
fn it_overwrites_repeated_routes() {
    let (out, _) = run("ADD A,B,10,5\nADD A,B,1,1\nQUERY A,B\n");
    assert_eq!(out, "EDGE A,B,10,5\nEDGE A,B,1,1\nQUERY A,B\nPATH 45.00,A,B\n");
}

#[test]
fn it_rejects_unknown_locations() {
    let (out, err) = run("ADD A,B,10,5\nQUERY A,Z\n");
    assert_eq!(out, "EDGE A,B,10,5\n");
    assert_eq!(err, "MALFORMED QUERY,A,Z\n");
}

#[test]
fn it_ranks_alternatives() {
    let input = "\
ADD A,B,2,0
ADD B,D,2,0
ADD A,C,1,0
ADD C,D,1,0
ADD A,D,1,1
QUERY A,D
";
    let (out, err) = run(input);
    let lines: Vec<&str> = out.lines().skip(5).collect();
    assert_eq!(lines, vec![
        "QUERY A,D",
        "PATH 30.00,A,C,D",
        "PATH 45.00,A,D",
        "PATH 60.00,A,B,D",
    ]);
    assert_eq!(err, "");
}

#[test]
fn it_ranks_alternatives_with_rounded_legs() {
    let input = "\
ADD A,B,1.66667,0
ADD B,D,1.66667,0
ADD A,C,1.33334,0
ADD C,D,1.33334,0
ADD A,D,1,1
QUERY A,D
";
    let (out, err) = run(input);
    let lines: Vec<&str> = out.lines().skip(5).collect();
    assert_eq!(lines, vec![
        "QUERY A,D",
        "PATH 40.00,A,C,D",
        "PATH 45.00,A,D",
        "PATH 50.00,A,B,D",
    ]);
    assert_eq!(err, "");
}

#[test]
fn it_rejects_legs_too_large_to_price() {
    let (out, err) = run("ADD A,B,1e17,0\nADD B,C,1e17,0\nQUERY A,C\nQUERY A,B\n");
    assert_eq!(out, "");
    assert_eq!(err, "\
MALFORMED ADD,A,B,1e17,0
MALFORMED ADD,B,C,1e17,0
MALFORMED QUERY,A,C
MALFORMED QUERY,A,B
");
}

#[test]
fn it_keeps_going_after_malformed_lines() {
    let input = "\
ADD A,B
ADD A,B,far,1
HELLO
ROUTE A,B
QUERY A
ADD A,B,1,1
QUERY B,A
QUERY A,B
";
    let (out, err) = run(input);
    assert_eq!(out, "EDGE A,B,1,1\nQUERY A,B\nPATH 45.00,A,B\n");
    assert_eq!(err, "\
MALFORMED ADD,A,B
MALFORMED ADD,A,B,far,1
MALFORMED HELLO
MALFORMED ROUTE,A,B
MALFORMED QUERY,A
MALFORMED QUERY,B,A
");
}

#[test]
fn it_caps_routes_per_query() {
    let mut input = String::new();
    for hub in ["H1", "H2", "H3", "H4", "H5", "H6", "H7"].iter() {
        input.push_str(&format!("ADD O,{},1,0\nADD {},D,1,0\n", hub, hub));
    }
    input.push_str("QUERY O,D\n");

    let (out, _) = run(&input);
    let paths: Vec<&str> = out.lines().filter(|l| l.starts_with("PATH")).collect();
    assert_eq!(paths, vec![
        "PATH 30.00,O,H1,D",
        "PATH 30.00,O,H2,D",
        "PATH 30.00,O,H3,D",
        "PATH 30.00,O,H4,D",
        "PATH 30.00,O,H5,D",
    ]);

    let config = Config { max_routes: 2, ..Config::default() };
    let (out, _) = run_with(config, &input);
    assert_eq!(out.lines().filter(|l| l.starts_with("PATH")).count(), 2);
}

#[test]
fn it_answers_identically_when_repeated() {
    let input = "\
ADD A,B,1,0
ADD B,C,1,0
ADD A,C,2,0
ADD C,B,0,0.5
ADD B,D,1,0
ADD C,D,1,0
QUERY A,D
QUERY A,D
";
    let (out, _) = run(input);
    let answers: Vec<&str> = out.split("QUERY A,D\n").skip(1).collect();
    assert_eq!(answers.len(), 2);
    assert_eq!(answers[0], answers[1]);
    assert_eq!(answers[0].lines().count(), 4);
}

#[test]
fn it_sees_routes_added_after_a_failed_query() {
    let (out, err) = run("ADD A,B,1,0\nQUERY A,C\nADD B,C,1,0\nQUERY A,C\n");
    assert_eq!(err, "MALFORMED QUERY,A,C\n");
    assert!(out.ends_with("QUERY A,C\nPATH 30.00,A,B,C\n"));
}

#[test]
fn it_runs_with_default_config_file() {
    let config = yaml::load_config("data/config/default.yaml").unwrap();
    let (out, _) = run_with(config, "ADD Las Vegas,New York,2248,300\nQUERY Las Vegas,New York\n");
    assert_eq!(out, "\
EDGE Las Vegas,New York,2248,300
QUERY Las Vegas,New York
PATH 42720.00,Las Vegas,New York
");
}
