use crate::timer::TimerFired;

#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Timer(TimerFired),
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}
