//! Interactive host shell for local development.
//!
//! A thin line-oriented front end over [`Tracker`]: one command per line,
//! with a current caller identity switched via `su`. This is a stand-in
//! for the external transport layer; the core never depends on it.

use taskboard_proto::identity::Identity;
use taskboard_proto::member::{Member, MemberId};
use taskboard_proto::task::{Task, TaskId, TaskPayload};

use crate::tracker::Tracker;

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch the current caller identity.
    Su(Identity),
    /// Print the current caller identity.
    WhoAmI,
    /// Print the administrator identity.
    Owner,
    /// Register a member.
    AddMember(Identity),
    /// Look up a member by id.
    Member(MemberId),
    /// List all members.
    Members,
    /// Delete a member by id.
    RmMember(MemberId),
    /// Overwrite a member's identity.
    UpdateMember(MemberId, Identity),
    /// Membership predicate for an identity.
    IsMember(Identity),
    /// Create a task.
    AddTask(TaskPayload),
    /// Look up a task by id.
    Task(TaskId),
    /// List all tasks.
    Tasks,
    /// Delete a task by id.
    RmTask(TaskId),
    /// Mark a task done.
    Done(TaskId),
    /// List an identity's tasks filtered by completion state.
    Mine(Identity, bool),
    /// Search tasks by title or description.
    Search(String),
    /// Print the command summary.
    Help,
    /// Leave the shell.
    Quit,
}

/// Parses one input line into a [`Command`].
///
/// # Errors
///
/// Returns a usage message for an unknown command or malformed arguments.
pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    match word {
        "su" => one_token(rest, "usage: su <identity>").map(|t| Command::Su(Identity::new(t))),
        "whoami" => Ok(Command::WhoAmI),
        "owner" => Ok(Command::Owner),
        "add-member" => one_token(rest, "usage: add-member <identity>")
            .map(|t| Command::AddMember(Identity::new(t))),
        "member" => parse_id(rest, "usage: member <id>").map(|id| Command::Member(MemberId::from_raw(id))),
        "members" => Ok(Command::Members),
        "rm-member" => {
            parse_id(rest, "usage: rm-member <id>").map(|id| Command::RmMember(MemberId::from_raw(id)))
        }
        "update-member" => {
            let (id, identity) = rest
                .split_once(char::is_whitespace)
                .ok_or("usage: update-member <id> <identity>")?;
            let id = id
                .parse::<u32>()
                .map_err(|_| format!("not an id: {id}"))?;
            Ok(Command::UpdateMember(
                MemberId::from_raw(id),
                Identity::new(identity.trim()),
            ))
        }
        "is-member" => one_token(rest, "usage: is-member <identity>")
            .map(|t| Command::IsMember(Identity::new(t))),
        "add-task" => parse_add_task(rest),
        "task" => parse_id(rest, "usage: task <id>").map(|id| Command::Task(TaskId::from_raw(id))),
        "tasks" => Ok(Command::Tasks),
        "rm-task" => {
            parse_id(rest, "usage: rm-task <id>").map(|id| Command::RmTask(TaskId::from_raw(id)))
        }
        "done" => parse_id(rest, "usage: done <id>").map(|id| Command::Done(TaskId::from_raw(id))),
        "mine" => parse_mine(rest),
        "search" => {
            if rest.is_empty() {
                Err("usage: search <text>".to_string())
            } else {
                Ok(Command::Search(rest.to_string()))
            }
        }
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command: {other} (try 'help')")),
    }
}

fn one_token(rest: &str, usage: &str) -> Result<String, String> {
    if rest.is_empty() || rest.contains(char::is_whitespace) {
        return Err(usage.to_string());
    }
    Ok(rest.to_string())
}

fn parse_id(rest: &str, usage: &str) -> Result<u32, String> {
    if rest.is_empty() {
        return Err(usage.to_string());
    }
    rest.parse::<u32>().map_err(|_| format!("not an id: {rest}"))
}

/// `add-task <assignee> <hours> <title> / <description>`
fn parse_add_task(rest: &str) -> Result<Command, String> {
    const USAGE: &str = "usage: add-task <assignee> <hours> <title> / <description>";
    let (assignee, rest) = rest.split_once(char::is_whitespace).ok_or(USAGE)?;
    let (hours, rest) = rest.trim().split_once(char::is_whitespace).ok_or(USAGE)?;
    let hours = hours
        .parse::<u64>()
        .map_err(|_| format!("not an hour count: {hours}"))?;
    let (title, description) = rest.trim().split_once(" / ").ok_or(USAGE)?;
    Ok(Command::AddTask(TaskPayload {
        title: title.trim().to_string(),
        description: description.trim().to_string(),
        assigned_to: Identity::new(assignee),
        deadline_hours: hours,
    }))
}

/// `mine <identity> [open|done]`
fn parse_mine(rest: &str) -> Result<Command, String> {
    const USAGE: &str = "usage: mine <identity> [open|done]";
    let mut tokens = rest.split_whitespace();
    let identity = tokens.next().ok_or(USAGE)?;
    let done = match tokens.next() {
        None | Some("open") => false,
        Some("done") => true,
        Some(other) => return Err(format!("expected 'open' or 'done', got {other}")),
    };
    if tokens.next().is_some() {
        return Err(USAGE.to_string());
    }
    Ok(Command::Mine(Identity::new(identity), done))
}

const HELP: &str = "commands:
  su <identity>                          switch caller
  whoami / owner                         show caller / administrator
  add-member <identity>                  register a member (admin)
  member <id> / members                  look up / list members
  rm-member <id>                         delete a member (admin)
  update-member <id> <identity>          overwrite a member (admin)
  is-member <identity>                   membership predicate
  add-task <assignee> <hours> <title> / <description>
                                         create a task (admin)
  task <id> / tasks                      look up / list tasks
  rm-task <id>                           delete a task (admin)
  done <id>                              complete a task (admin or assignee)
  mine <identity> [open|done]            an identity's tasks
  search <text>                          search titles and descriptions
  quit";

/// The shell: a tracker plus the current caller identity.
#[derive(Debug)]
pub struct Shell {
    tracker: Tracker,
    caller: Identity,
}

impl Shell {
    /// Creates a shell whose initial caller is the administrator.
    #[must_use]
    pub fn new(tracker: Tracker) -> Self {
        let caller = tracker.owner().clone();
        Self { tracker, caller }
    }

    /// Returns the current caller identity.
    #[must_use]
    pub const fn caller(&self) -> &Identity {
        &self.caller
    }

    /// Executes one command and returns the output to print.
    pub fn run(&mut self, command: Command) -> String {
        match command {
            Command::Su(identity) => {
                self.caller = identity;
                format!("caller is now {}", self.caller)
            }
            Command::WhoAmI => self.caller.to_string(),
            Command::Owner => self.tracker.owner().to_string(),
            Command::AddMember(identity) => {
                reply(self.tracker.add_member(&self.caller, identity), |id| {
                    format!("member {id} registered")
                })
            }
            Command::Member(id) => reply(self.tracker.member(id), |m| format_member(&m)),
            Command::Members => reply(self.tracker.members(), |members| {
                members
                    .iter()
                    .map(format_member)
                    .collect::<Vec<_>>()
                    .join("\n")
            }),
            Command::RmMember(id) => reply(self.tracker.delete_member(&self.caller, id), |m| {
                format!("member {} deleted", m.id)
            }),
            Command::UpdateMember(id, identity) => reply(
                self.tracker.update_member(&self.caller, id, identity),
                |id| format!("member {id} updated"),
            ),
            Command::IsMember(identity) => self.tracker.is_member(&identity).to_string(),
            Command::AddTask(payload) => {
                reply(self.tracker.add_task(&self.caller, payload), |id| {
                    format!("task {id} created")
                })
            }
            Command::Task(id) => reply(self.tracker.task(id), |t| format_task(&t)),
            Command::Tasks => reply(self.tracker.tasks(), |tasks| {
                tasks.iter().map(format_task).collect::<Vec<_>>().join("\n")
            }),
            Command::RmTask(id) => reply(self.tracker.delete_task(&self.caller, id), |t| {
                format!("task {} deleted", t.id)
            }),
            Command::Done(id) => reply(self.tracker.complete_task(&self.caller, id), |id| {
                format!("task {id} completed")
            }),
            Command::Mine(identity, done) => {
                format_matches(&self.tracker.personal_tasks(&identity, done))
            }
            Command::Search(text) => format_matches(&self.tracker.search_tasks(&text)),
            Command::Help => HELP.to_string(),
            Command::Quit => "bye".to_string(),
        }
    }
}

fn reply<T>(result: Result<T, crate::error::TrackerError>, ok: impl FnOnce(T) -> String) -> String {
    match result {
        Ok(value) => ok(value),
        Err(e) => format!("error: {e}"),
    }
}

fn format_member(member: &Member) -> String {
    format!("#{} {}", member.id, member.identity)
}

fn format_task(task: &Task) -> String {
    let state = if task.is_done { "done" } else { "open" };
    format!(
        "#{} [{}] {}: {} (assignee {}, due {}h)",
        task.id, state, task.title, task.description, task.assigned_to, task.deadline_hours
    )
}

fn format_matches(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        "(none)".to_string()
    } else {
        tasks.iter().map(format_task).collect::<Vec<_>>().join("\n")
    }
}
