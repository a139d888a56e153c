use std::process::Command;
use std::thread;

use colored::Colorize;
use padbind_control::Performer;
use padbind_gamepad::{KeyEvent, KeyTarget};

use crate::action::Action;
use crate::{print_error, print_info};

const DEFAULT_SHELL: &str = "/bin/sh";

pub(crate) struct ActionRunner {
    keypress: Performer,
    shell: Option<Box<str>>,
}

impl ActionRunner {
    pub fn new(keypress: Performer) -> Self {
        Self {
            keypress,
            shell: None,
        }
    }

    pub fn run(&mut self, action: Action) {
        match action {
            Action::KeyPress(key) => self.keypress.key_event(&KeyEvent::down(key)),
            Action::KeyRelease(key) => self.keypress.key_event(&KeyEvent::up(key)),
            Action::KeyTap(combo) => {
                if let Err(e) = self.keypress.perform(&combo) {
                    print_error!("failed to tap {combo}: {e}");
                }
            }
            Action::Macros(macros) => {
                for combo in macros.iter() {
                    if let Err(e) = self.keypress.perform(combo) {
                        print_error!("failed to tap {combo}: {e}");
                        break;
                    }
                }
            }
            Action::Shell(command) => self.run_shell(command),
            Action::Log(message) => {
                print_info!("{message}");
            }
        }
    }

    /// Run a command on a worker thread so the frame loop never blocks on it.
    fn run_shell(&self, command: Box<str>) {
        let shell = self.shell.as_deref().unwrap_or(DEFAULT_SHELL).to_string();
        let spawned = thread::Builder::new()
            .name("padbind-shell".into())
            .spawn(move || {
                match Command::new(&shell).args(["-c", &*command]).output() {
                    Ok(output) => {
                        print_info!(
                            "shell command output: {}",
                            String::from_utf8_lossy(&output.stdout).trim_end()
                        );
                        if !output.status.success() {
                            print_error!("shell command \"{command}\" exited with {}", output.status);
                        }
                    }
                    Err(e) => {
                        print_error!("shell command error: {e}");
                    }
                }
            });
        if let Err(e) = spawned {
            print_error!("failed to spawn shell thread: {e}");
        }
    }

    pub fn set_shell(&mut self, shell: Box<str>) {
        self.shell = Some(shell);
    }
}
