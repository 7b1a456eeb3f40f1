use diva_core::display::DisplayMode;
use diva_core::firmware::{BringupError, ClockWait, Firmware};
use diva_core::input::ButtonEvent;
use diva_soc::{BoardProfile, ButtonScript, SimulatedSoc};

/// What happened during a simulated session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub ticks: u64,
    pub toggles: u32,
    pub camera_switches: u32,
    pub final_mode: Option<DisplayMode>,
}

/// Boot the firmware on a simulated board, then run `ticks` loop iterations
/// while replaying `script` on the mode button.
///
/// Returns the SoC so the caller can inspect the final register state.
pub fn run(
    profile: &BoardProfile,
    initial_mode: DisplayMode,
    clock_polls: u32,
    script: &ButtonScript,
    ticks: u64,
) -> Result<(SimulatedSoc, SessionSummary), BringupError> {
    let mut soc = SimulatedSoc::from_profile(profile);
    let mut firmware = Firmware::with_mode(initial_mode);

    log::info!("board: {} ({})", profile.name, profile.description);
    firmware.boot(&mut soc, ClockWait::Polls(clock_polls))?;

    let mut summary = SessionSummary::default();
    for tick in 0..ticks {
        soc.set_button_b(script.held_at(tick));
        let report = firmware.poll(&mut soc);
        match report.event {
            Some(ButtonEvent::ToggleDisplay) => summary.toggles += 1,
            Some(ButtonEvent::CameraModeSwitch) => summary.camera_switches += 1,
            None => {}
        }
        summary.ticks += 1;
    }
    summary.final_mode = Some(firmware.mode());

    Ok((soc, summary))
}
