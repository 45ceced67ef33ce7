//! Interactive console menu: create, load, exit.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use tracing::{debug, error};

use crate::generate::{GenerationRequest, generate_routine, load_prepared_catalog, make_rng};
use crate::io::config::{IntRange, RoutineConfig};
use crate::io::prompt::{confirm, prompt_int, prompt_line, read_answer};
use crate::io::store::RoutineStore;

/// Menu entry selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    Load,
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(answer: &str) -> Self {
        match answer.trim() {
            "1" => MenuChoice::Create,
            "2" => MenuChoice::Load,
            "3" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// State shared across menu iterations.
pub struct Menu {
    config: RoutineConfig,
    store: RoutineStore,
    rng: StdRng,
}

impl Menu {
    pub fn new(config: RoutineConfig, store: RoutineStore) -> Self {
        let rng = make_rng(config.seed);
        Self { config, store, rng }
    }

    /// Run the menu until the user exits or input ends.
    ///
    /// A failing action is reported and the menu is shown again.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            writeln!(output, "\n--- MENÚ PRINCIPAL ---")?;
            writeln!(output, "1. Crear nueva rutina")?;
            writeln!(output, "2. Cargar rutina guardada")?;
            writeln!(output, "3. Salir")?;

            let Some(answer) = read_answer(input, output, "Selecciona una opción: ")? else {
                debug!("input closed at main menu");
                writeln!(output)?;
                return Ok(());
            };

            let outcome = match MenuChoice::parse(&answer) {
                MenuChoice::Create => self.create_routine(input, output),
                MenuChoice::Load => self.load_routine(input, output),
                MenuChoice::Exit => {
                    writeln!(output, "Saliendo del programa...")?;
                    return Ok(());
                }
                MenuChoice::Invalid => {
                    writeln!(output, "Opción no válida")?;
                    Ok(())
                }
            };
            if let Err(err) = outcome {
                error!(error = %format!("{err:#}"), "menu action failed");
                writeln!(output, "Error: {err:#}")?;
            }
        }
    }

    fn create_routine<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<()> {
        let catalog = load_prepared_catalog(&self.config)?;
        let retry = self.config.prompt.retry_policy();

        let days = self.config.days;
        let message = format!(
            "¿Cuántos días entrenas a la semana? ({}-{}): ",
            days.min, days.max
        );
        let days = to_u32(prompt_int(input, output, &message, days, retry)?)?;

        let minutes = self.config.session_minutes;
        let message = format!(
            "¿Cuántos minutos por sesión? ({}-{}): ",
            minutes.min, minutes.max
        );
        let session_minutes = to_u32(prompt_int(input, output, &message, minutes, retry)?)?;

        let request = GenerationRequest {
            days,
            session_minutes,
        };
        let text = generate_routine(&catalog, request, &mut self.rng)?;

        writeln!(output, "\n--- RUTINA GENERADA ---\n")?;
        writeln!(output, "{text}")?;

        if confirm(input, output, "¿Deseas guardar la rutina? (s/n): ")? {
            let name = prompt_line(input, output, "Nombre del archivo de la rutina: ")?;
            self.store.save(&name, &text)?;
            writeln!(output, "Rutina guardada correctamente.")?;
        }
        Ok(())
    }

    fn load_routine<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<()> {
        let files = self.store.list()?;
        if files.is_empty() {
            writeln!(output, "No hay rutinas guardadas.")?;
            return Ok(());
        }

        for (i, file) in files.iter().enumerate() {
            writeln!(output, "{}. {}", i + 1, file)?;
        }

        let count = i64::try_from(files.len()).context("too many saved routines")?;
        let choice = prompt_int(
            input,
            output,
            "Elige una rutina: ",
            IntRange::new(1, count),
            self.config.prompt.retry_policy(),
        )?;
        let choice = usize::try_from(choice).context("selection out of range")?;
        if let Some(text) = self.store.load_selected(&files, choice)? {
            writeln!(output, "\n--- RUTINA CARGADA ---\n")?;
            writeln!(output, "{text}")?;
        }
        Ok(())
    }
}

fn to_u32(value: i64) -> Result<u32> {
    u32::try_from(value).with_context(|| format!("{value} does not fit in u32"))
}
