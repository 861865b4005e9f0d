//! Exit handling: signal handlers and terminal cleanup.

/// Put the terminal back in cooked mode with echo, using termios directly.
fn restore_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit; runs on every normal exit path.
extern "C" fn cleanup_on_exit() {
    restore_termios();
    // Only print escape codes if stdout is a TTY (not when piping)
    unsafe {
        if libc::isatty(libc::STDOUT_FILENO) == 1 {
            let seq = b"\x1b[0m\x1b[?25h";
            libc::write(
                libc::STDOUT_FILENO,
                seq.as_ptr() as *const libc::c_void,
                seq.len(),
            );
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit, atexit handles the terminal.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}
