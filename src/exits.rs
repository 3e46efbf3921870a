//! Exit handling: signal handlers and terminal cleanup.

use std::sync::atomic::{AtomicBool, Ordering};

/// Set while the widget owns the screen; cleanup only touches it then.
static SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);

pub fn set_screen_active(active: bool) {
    SCREEN_ACTIVE.store(active, Ordering::SeqCst);
}

/// Reset terminal to sane state using termios directly
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Claim the restore. True at most once per screen session.
fn take_screen_active() -> bool {
    SCREEN_ACTIVE.swap(false, Ordering::SeqCst)
}

/// Leave the widget screen. Only async-signal-safe calls: atomics,
/// tcgetattr/tcsetattr, isatty and write.
fn restore_screen() {
    if !take_screen_active() {
        return;
    }
    reset_terminal_termios();
    // Reset colors, show cursor, leave the alternate screen
    const RESTORE: &[u8] = b"\x1b[0m\x1b[?25h\x1b[?1049l";
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, RESTORE.as_ptr() as *const libc::c_void, RESTORE.len());
        }
    }
}

/// Cleanup function registered with atexit - runs on normal exit
extern "C" fn cleanup_on_exit() {
    restore_screen();
}

/// Signal handler for SIGINT/SIGTERM/SIGHUP - restore, then `_exit`
extern "C" fn signal_handler(_: libc::c_int) {
    restore_screen();
    unsafe { libc::_exit(130) }
}

/// Install signal handlers, register atexit cleanup, and keep the password
/// out of core dumps. Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
        #[cfg(target_os = "linux")]
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

/// Reset terminal state before anything is drawn.
pub fn reset_terminal() {
    reset_terminal_termios();
}
