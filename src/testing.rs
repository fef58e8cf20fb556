//! Host-side doubles for the port bus and the display.

use std::collections::{HashMap, VecDeque};

use crate::config::SERIAL_BASE;
use crate::display::DisplayWriter;
use crate::port::PortIo;

const IIR_NONE_PENDING: u8 = 0x01;
const IIR_RECEIVED_DATA: u8 = 0x04;
const LSR_DATA_READY: u8 = 0x01;
const LSR_TRANSMITTER_IDLE: u8 = 0x60;

/// Records every port write and models just enough hardware for the core:
/// a 16550 receive queue at COM1 and plain latch registers everywhere else
/// (the controllers' mask registers read back what was last written).
pub struct FakeBus {
    writes: Vec<(u16, u8)>,
    latches: HashMap<u16, u8>,
    uart_base: u16,
    received: VecDeque<u8>,
    identification: Option<u8>,
}

impl FakeBus {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            latches: HashMap::new(),
            uart_base: SERIAL_BASE,
            received: VecDeque::new(),
            identification: None,
        }
    }

    pub fn with_input(bytes: &[u8]) -> Self {
        let mut bus = Self::new();
        bus.receive(bytes);
        bus
    }

    /// Queues bytes as if they had arrived on the wire.
    pub fn receive(&mut self, bytes: &[u8]) {
        self.received.extend(bytes.iter().copied());
    }

    /// Pins the interrupt identification register to `value`.
    pub fn force_identification(&mut self, value: u8) {
        self.identification = Some(value);
    }

    pub fn pending_input(&self) -> usize {
        self.received.len()
    }

    pub fn writes(&self) -> &[(u16, u8)] {
        &self.writes
    }

    pub fn writes_to(&self, port: u16) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(p, _)| *p == port)
            .map(|(_, value)| *value)
            .collect()
    }

    /// Everything transmitted on COM1.
    pub fn echoed(&self) -> Vec<u8> {
        self.writes_to(self.uart_base)
    }
}

impl PortIo for FakeBus {
    fn read_byte(&mut self, port: u16) -> u8 {
        match port.wrapping_sub(self.uart_base) {
            0 => self.received.pop_front().unwrap_or(0),
            2 => self.identification.unwrap_or(if self.received.is_empty() {
                IIR_NONE_PENDING
            } else {
                IIR_RECEIVED_DATA
            }),
            5 if self.received.is_empty() => LSR_TRANSMITTER_IDLE,
            5 => LSR_TRANSMITTER_IDLE | LSR_DATA_READY,
            _ => self.latches.get(&port).copied().unwrap_or(0),
        }
    }

    fn write_byte(&mut self, port: u16, value: u8) {
        self.writes.push((port, value));
        if port != self.uart_base {
            self.latches.insert(port, value);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCall {
    Text(Vec<u8>),
    Line(Vec<u8>),
}

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub calls: Vec<DisplayCall>,
}

impl RecordingDisplay {
    /// Contents of every `write_line_with_newline` call, in order.
    pub fn lines(&self) -> Vec<Vec<u8>> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DisplayCall::Line(text) => Some(text.clone()),
                DisplayCall::Text(_) => None,
            })
            .collect()
    }
}

impl DisplayWriter for RecordingDisplay {
    fn write_line(&mut self, text: &[u8]) {
        self.calls.push(DisplayCall::Text(text.to_vec()));
    }

    fn write_line_with_newline(&mut self, text: &[u8]) {
        self.calls.push(DisplayCall::Line(text.to_vec()));
    }
}
