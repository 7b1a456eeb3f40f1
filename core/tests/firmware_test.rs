use diva_core::core::{StreamChannel, StreamConfig};
use diva_core::display::DisplayMode;
use diva_core::firmware::bringup::{configure_frame_streams, wait_for_capture_clock};
use diva_core::firmware::{BringupError, ClockWait, Firmware};
use diva_core::input::ButtonEvent;
use diva_soc::{RegisterWrite, SimulatedSoc, StreamField};

fn booted() -> (Firmware, SimulatedSoc) {
    let mut soc = SimulatedSoc::new();
    soc.set_capture_frequency(27_000_000);
    let mut fw = Firmware::new();
    fw.boot(&mut soc, ClockWait::Polls(0)).unwrap();
    (fw, soc)
}

// ==========================================================================
// Camera clock wait
// ==========================================================================

#[test]
fn test_clock_present_returns_immediately() {
    let mut soc = SimulatedSoc::new();
    soc.queue_clock_readings([27_000_000, 0]);
    assert_eq!(wait_for_capture_clock(&mut soc, ClockWait::Polls(0)), Ok(27_000_000));
}

#[test]
fn test_low_nonzero_first_reading_is_accepted() {
    let mut soc = SimulatedSoc::new();
    soc.queue_clock_readings([1_000, 27_000_000]);
    assert_eq!(wait_for_capture_clock(&mut soc, ClockWait::Polls(0)), Ok(1_000));
}

#[test]
fn test_waits_for_clock_above_threshold() {
    let mut soc = SimulatedSoc::new();
    soc.queue_clock_readings([0, 0, 26_500_000, 26_500_001]);
    assert_eq!(
        wait_for_capture_clock(&mut soc, ClockWait::Forever),
        Ok(26_500_001)
    );
}

#[test]
fn test_clock_wait_times_out() {
    let mut soc = SimulatedSoc::new();
    soc.queue_clock_readings([0, 0, 12_000_000]);
    assert_eq!(
        wait_for_capture_clock(&mut soc, ClockWait::Polls(5)),
        Err(BringupError::CaptureClockTimeout {
            polls: 5,
            last_hz: 12_000_000,
        })
    );
}

#[test]
fn test_timeout_message_names_threshold() {
    let err = BringupError::CaptureClockTimeout {
        polls: 3,
        last_hz: 0,
    };
    let msg = err.to_string();
    assert!(msg.contains("3 polls"));
    assert!(msg.contains("26500000"));
}

// ==========================================================================
// Boot
// ==========================================================================

#[test]
fn test_streams_configured_reader_then_writer() {
    let mut soc = SimulatedSoc::new();
    configure_frame_streams(&mut soc);

    let order: Vec<_> = soc
        .writes()
        .iter()
        .filter_map(|w| match w {
            RegisterWrite::Stream(ch, StreamField::Reset) => Some(*ch),
            _ => None,
        })
        .collect();
    assert_eq!(order, vec![StreamChannel::Reader, StreamChannel::Writer]);

    for ch in [StreamChannel::Reader, StreamChannel::Writer] {
        let regs = soc.stream(ch);
        assert!(regs.enabled);
        assert_eq!(regs.config(), StreamConfig::FRAME_BUFFER);
    }
}

#[test]
fn test_boot_applies_scaled_mode_last() {
    let (fw, soc) = booted();
    assert_eq!(fw.mode(), DisplayMode::Scaled);
    assert_eq!(soc.display_state(), (DisplayMode::Scaled.geometry(), true));
    assert_eq!(soc.writes().last(), Some(&RegisterWrite::ScalerEnable(true)));
}

#[test]
fn test_boot_with_initial_native_mode() {
    let mut soc = SimulatedSoc::new();
    soc.set_capture_frequency(27_000_000);
    let mut fw = Firmware::with_mode(DisplayMode::Native);
    fw.boot(&mut soc, ClockWait::Forever).unwrap();
    assert_eq!(soc.display_state(), (DisplayMode::Native.geometry(), false));
}

#[test]
fn test_boot_fails_without_camera() {
    let mut soc = SimulatedSoc::new();
    let mut fw = Firmware::new();
    assert!(fw.boot(&mut soc, ClockWait::Polls(10)).is_err());
    // Nothing downstream of the clock wait was touched
    assert!(soc.writes().is_empty());
}

// ==========================================================================
// Control loop
// ==========================================================================

#[test]
fn test_poll_counts_iterations_and_latches() {
    let (mut fw, mut soc) = booted();
    for expected in 0..5 {
        let report = fw.poll(&mut soc);
        assert_eq!(report.iteration, expected);
        assert_eq!(report.event, None);
        assert_eq!(report.status.frequency_hz, 27_000_000);
    }
    assert_eq!(fw.iteration(), 5);
    assert_eq!(soc.latch_count(), 5);
}

#[test]
fn test_long_press_toggles_display() {
    let (mut fw, mut soc) = booted();
    soc.set_button_b(true);

    let reports: Vec<_> = (0..150).map(|_| fw.poll(&mut soc)).collect();
    let toggles: Vec<_> = reports
        .iter()
        .filter(|r| r.event == Some(ButtonEvent::ToggleDisplay))
        .collect();
    assert_eq!(toggles.len(), 1);
    assert_eq!(toggles[0].iteration, 100);
    assert_eq!(toggles[0].mode, DisplayMode::Native);
    assert_eq!(soc.display_state(), (DisplayMode::Native.geometry(), false));
    assert_eq!(soc.camera_mode_pulses(), 0);

    // Releasing after a long press does not pulse the camera
    soc.set_button_b(false);
    assert_eq!(fw.poll(&mut soc).event, None);
    assert_eq!(soc.camera_mode_pulses(), 0);
}

#[test]
fn test_short_press_pulses_camera() {
    let (mut fw, mut soc) = booted();
    soc.set_button_b(true);
    for _ in 0..20 {
        fw.poll(&mut soc);
    }
    soc.set_button_b(false);

    let report = fw.poll(&mut soc);
    assert_eq!(report.event, Some(ButtonEvent::CameraModeSwitch));
    assert_eq!(report.mode, DisplayMode::Scaled);
    assert_eq!(soc.camera_mode_pulses(), 1);
}

#[test]
fn test_button_a_is_ignored() {
    let (mut fw, mut soc) = booted();
    soc.set_button_a(true);
    for _ in 0..200 {
        assert_eq!(fw.poll(&mut soc).event, None);
    }
    assert_eq!(fw.debouncer().hold_count(), 0);
}
