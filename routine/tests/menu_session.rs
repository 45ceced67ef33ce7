//! Scripted menu sessions driving `Menu::run` with in-memory input.
//!
//! Each script walks the same prompts a user would answer on the console,
//! including rejected answers, and checks the transcript and saved files.

use std::fs;
use std::io::Cursor;

use routine::io::store::RoutineStore;
use routine::menu::Menu;
use routine::test_support::TestWorkspace;

fn run_script(workspace: &TestWorkspace, script: &str) -> String {
    let store = RoutineStore::new(&workspace.config.routines_dir);
    store.ensure_dir().expect("ensure dir");
    let mut menu = Menu::new(workspace.config.clone(), store);
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    menu.run(&mut input, &mut output).expect("menu run");
    String::from_utf8(output).expect("utf8")
}

/// Create → reprompt on bad answers → save → load the saved routine → exit.
///
/// Script:
/// 1. `1` create, days `2` (out of range), `tres` (not a number), `3`
/// 2. minutes `100` (out of range), `60`
/// 3. save `s`, name `semana`
/// 4. `2` load, pick `1`
/// 5. `3` exit
#[test]
fn create_save_and_load_round_trip() {
    let workspace = TestWorkspace::new().expect("workspace");
    let script = "1\n2\ntres\n3\n100\n60\ns\nsemana\n2\n1\n3\n";

    let transcript = run_script(&workspace, script);

    assert!(transcript.contains("Introduce un número entre 3 y 5"));
    assert!(transcript.contains("Entrada no válida"));
    assert!(transcript.contains("Introduce un número entre 45 y 90"));
    assert!(transcript.contains("--- RUTINA GENERADA ---"));
    assert!(transcript.contains("Rutina guardada correctamente."));
    assert!(transcript.contains("1. semana.txt"));
    assert!(transcript.contains("--- RUTINA CARGADA ---"));
    assert!(transcript.ends_with("Saliendo del programa...\n"));

    let saved = fs::read_to_string(workspace.config.routines_dir.join("semana.txt"))
        .expect("saved routine");
    assert!(saved.starts_with(
        "Rutina de entrenamiento\nDías por semana: 3\nTiempo por sesión: 60 minutos\n\n"
    ));
    // Shown once after generation and once after loading.
    assert_eq!(transcript.matches(saved.as_str()).count(), 2);
}

#[test]
fn declining_to_save_writes_nothing() {
    let workspace = TestWorkspace::new().expect("workspace");

    let transcript = run_script(&workspace, "1\n5\n90\nn\n3\n");

    assert!(transcript.contains("Días por semana: 5"));
    assert!(!transcript.contains("Rutina guardada"));
    let store = RoutineStore::new(&workspace.config.routines_dir);
    assert!(store.list().expect("list").is_empty());
}

#[test]
fn more_days_than_groups_leaves_empty_days() {
    let workspace = TestWorkspace::new().expect("workspace");
    fs::write(
        &workspace.config.catalog_path,
        "grupo_muscular,ejercicio\npecho,fondos\nespalda,remo\n",
    )
    .expect("write catalog");

    let transcript = run_script(&workspace, "1\n4\n45\nn\n3\n");

    for label in ["Día 1:", "Día 2:", "Día 3:", "Día 4:"] {
        assert!(transcript.contains(label), "missing {label}");
    }
    assert_eq!(transcript.matches("  - ").count(), 2);
}

#[test]
fn empty_group_is_rejected_by_default() {
    let workspace = TestWorkspace::new().expect("workspace");
    fs::write(
        &workspace.config.catalog_path,
        "grupo_muscular,ejercicio\npecho,fondos\ngemelos,\n",
    )
    .expect("write catalog");

    let transcript = run_script(&workspace, "1\n3\n");

    assert!(transcript.contains("'gemelos' has no exercises"));
    assert!(!transcript.contains("--- RUTINA GENERADA ---"));
}
