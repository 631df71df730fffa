use flightscript::{
    RunOption, Script, SolverInitialization, SolverModel, SurfaceSelection, Symmetry,
    DEFAULT_SCRIPT_NAME,
};

mod common;

#[test]
fn open_and_initialize_without_banners_yields_two_blocks() {
    let td = tempfile::tempdir().expect("tempdir");
    let path = td.path().join(DEFAULT_SCRIPT_NAME);

    let mut script = Script::with_banners(false);
    script
        .open_fsm("C:/models/wing.fsm", RunOption::Disable)
        .unwrap()
        .initialize_solver(&SolverInitialization::new(SolverModel::Incompressible))
        .unwrap();
    script.write_to_file(&path).unwrap();

    assert_eq!(
        common::read_lines(&path),
        [
            "OPEN",
            "C:/models/wing.fsm",
            "LOAD_SOLVER_INITIALIZATION DISABLE",
            "INITIALIZE_SOLVER",
            "SOLVER_MODEL INCOMPRESSIBLE",
            "SURFACES -1",
            "WAKE_TERMINATION_X DEFAULT",
            "SYMMETRY NONE",
            "WALL_COLLISION_AVOIDANCE ENABLE",
            "STABILIZATION ENABLE 1.0",
        ]
    );
}

#[test]
fn banners_introduce_each_block() {
    let mut script = Script::new();
    script
        .new_simulation()
        .unwrap()
        .start_solver()
        .unwrap()
        .close_flightstream()
        .unwrap();
    let banner_titles: Vec<&String> = script
        .lines()
        .iter()
        .filter(|l| l.starts_with("#*") && l.contains(" "))
        .collect();
    assert_eq!(banner_titles.len(), 3, "{:#?}", script.lines());
    assert_eq!(script.lines().last().map(String::as_str), Some("CLOSE_FLIGHTSTREAM"));
    // 3 blocks x (4 banner lines + 1 command)
    assert_eq!(script.len(), 15);
}

#[test]
fn failed_emitter_keeps_earlier_blocks() {
    let mut script = Script::with_banners(false);
    script.new_simulation().unwrap();
    let err = script.set_significant_digits(0).unwrap_err();
    assert_eq!(err.parameter(), "digits");
    assert_eq!(script.lines(), ["NEW_SIMULATION"]);
    script.start_solver().unwrap();
    assert_eq!(script.lines(), ["NEW_SIMULATION", "START_SOLVER"]);
}

#[test]
fn repeated_initialization_appends_identical_blocks() {
    let init = SolverInitialization::new(SolverModel::SubsonicPrandtlGlauert)
        .surfaces(SurfaceSelection::List(vec![
            (1, RunOption::Enable),
            (2, RunOption::Disable),
        ]))
        .symmetry(Symmetry::Periodic(3));

    let mut single = Script::new();
    single.initialize_solver(&init).unwrap();
    let single_len = single.len();

    let mut twice = Script::new();
    twice.initialize_solver(&init).unwrap();
    twice.initialize_solver(&init).unwrap();

    assert_eq!(twice.len(), 2 * single_len);
    let (first, second) = twice.lines().split_at(single_len);
    assert_eq!(first, second);
    assert_eq!(first, single.lines());
}
