use std::{
    cell::RefCell,
    fmt,
    io::Write,
    rc::{Rc, Weak},
};

use tracing::debug;

use crate::Result;

/// Sender name used for room announcements.
pub const SYSTEM: &str = "System";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub from: String,
    pub text: String,
}

impl Message {
    pub fn new(from: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            text: text.into(),
        }
    }
}

pub trait Mediator {
    fn register(&self, user: &Rc<User>, out: &mut dyn Write) -> Result<()>;
    fn send(&self, text: &str, sender: &User, out: &mut dyn Write) -> Result<()>;
}

/// Routes messages between its members. Members only know the room.
///
/// The room keeps weak handles so that users, which hold the room, are not
/// kept alive by it. A dropped user simply stops receiving.
#[derive(Default)]
pub struct ChatRoom {
    members: RefCell<Vec<Weak<User>>>,
}

impl ChatRoom {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn members(&self) -> Vec<Rc<User>> {
        self.members.borrow().iter().filter_map(Weak::upgrade).collect()
    }

    fn broadcast(&self, message: &Message, skip: &User, out: &mut dyn Write) -> Result<()> {
        for member in self.members() {
            if !std::ptr::eq(Rc::as_ptr(&member), skip) {
                member.receive(message.clone(), out)?;
            }
        }
        Ok(())
    }
}

impl Mediator for ChatRoom {
    /// Adds `user` and tells everyone already present. The newcomer gets no
    /// notice of its own arrival or of earlier joins.
    fn register(&self, user: &Rc<User>, out: &mut dyn Write) -> Result<()> {
        self.members.borrow_mut().push(Rc::downgrade(user));
        debug!(user = user.name(), "registered");

        let notice = Message::new(SYSTEM, format!("User {} joined the chat", user.name()));
        self.broadcast(&notice, user, out)
    }

    fn send(&self, text: &str, sender: &User, out: &mut dyn Write) -> Result<()> {
        debug!(from = sender.name(), "broadcasting");
        self.broadcast(&Message::new(sender.name(), text), sender, out)
    }
}

pub struct User {
    name: String,
    mediator: Rc<dyn Mediator>,
    inbox: RefCell<Vec<Message>>,
}

impl User {
    pub fn new(mediator: Rc<dyn Mediator>, name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            mediator,
            inbox: RefCell::new(vec![]),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn send(&self, text: &str, out: &mut dyn Write) -> Result<()> {
        self.mediator.send(text, self, out)
    }

    pub fn receive(&self, message: Message, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} -> {}: {}", message.from, self.name, message.text)?;
        self.inbox.borrow_mut().push(message);
        Ok(())
    }

    pub fn inbox(&self) -> Vec<Message> {
        self.inbox.borrow().clone()
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("inbox", &self.inbox.borrow().len())
            .finish()
    }
}
