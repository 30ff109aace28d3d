// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! PTY-based integration tests. Each test runs its controlled half in a child process
//! whose stdin is a real PTY, so actual termios settings and `read(2)` timing are
//! exercised.

mod test_flag_verification;
mod test_read_timing;
mod test_restore_fidelity;

use rustix::termios::{SpecialCodeIndex, Termios};

/// Compare everything raw mode could touch. [`Termios`] doesn't implement
/// [`PartialEq`], so compare field by field.
fn termios_differences(expected: &Termios, actual: &Termios) -> Vec<String> {
    let mut differences = vec![];

    if expected.input_modes != actual.input_modes {
        differences.push(format!(
            "input_modes: {:?} != {:?}",
            expected.input_modes, actual.input_modes
        ));
    }
    if expected.output_modes != actual.output_modes {
        differences.push(format!(
            "output_modes: {:?} != {:?}",
            expected.output_modes, actual.output_modes
        ));
    }
    if expected.control_modes != actual.control_modes {
        differences.push(format!(
            "control_modes: {:?} != {:?}",
            expected.control_modes, actual.control_modes
        ));
    }
    if expected.local_modes != actual.local_modes {
        differences.push(format!(
            "local_modes: {:?} != {:?}",
            expected.local_modes, actual.local_modes
        ));
    }

    for (name, index) in [
        ("VINTR", SpecialCodeIndex::VINTR),
        ("VQUIT", SpecialCodeIndex::VQUIT),
        ("VERASE", SpecialCodeIndex::VERASE),
        ("VKILL", SpecialCodeIndex::VKILL),
        ("VEOF", SpecialCodeIndex::VEOF),
        ("VEOL", SpecialCodeIndex::VEOL),
        ("VSTART", SpecialCodeIndex::VSTART),
        ("VSTOP", SpecialCodeIndex::VSTOP),
        ("VSUSP", SpecialCodeIndex::VSUSP),
        ("VMIN", SpecialCodeIndex::VMIN),
        ("VTIME", SpecialCodeIndex::VTIME),
    ] {
        let (lhs, rhs) = (expected.special_codes[index], actual.special_codes[index]);
        if lhs != rhs {
            differences.push(format!("{name}: {lhs} != {rhs}"));
        }
    }

    differences
}

/// `tcgetattr` on stdin, or fail the controlled process.
fn current_termios_or_exit() -> Termios {
    match rustix::termios::tcgetattr(std::io::stdin()) {
        Ok(it) => it,
        Err(e) => crate::exit_with_failure(&format!("Could not read termios: {e}")),
    }
}
