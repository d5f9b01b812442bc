//! Inbound byte queue shared between the UART interrupt and the control loop.
//!
//! A fixed-capacity ring built on `critical-section` and `heapless::Deque`.
//! The interrupt side pushes bytes through a [`ByteWriter`], the control loop
//! drains them through a [`ByteReader`] without ever blocking.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Error returned when a byte is pushed into a full queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendError(pub u8);

/// A bounded, interrupt-safe byte queue.
pub struct ByteQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<u8, SIZE>>>,
}

impl<const SIZE: usize> ByteQueue<SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a writer handle for the receiving side of the serial port.
    pub const fn writer(&self) -> ByteWriter<'_, SIZE> {
        ByteWriter { queue: self }
    }

    /// Get a reader handle for the control loop.
    pub const fn reader(&self) -> ByteReader<'_, SIZE> {
        ByteReader { queue: self }
    }

    /// Push a received byte.
    ///
    /// Returns `Err(SendError(byte))` if the queue is full; the byte is lost.
    pub fn store(&self, byte: u8) -> Result<(), SendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(byte).map_err(SendError)
        })
    }

    /// Pop the oldest byte, if any.
    pub fn read(&self) -> Option<u8> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Look at the oldest byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().front().copied())
    }

    /// Number of buffered bytes.
    pub fn available(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    /// Pop exactly `out.len()` bytes into `out`.
    ///
    /// Nothing is consumed unless enough bytes are buffered.
    pub fn read_exact(&self, out: &mut [u8]) -> bool {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            if queue.len() < out.len() {
                return false;
            }
            for slot in out.iter_mut() {
                // Length was checked above, so the queue cannot run dry here.
                *slot = queue.pop_front().unwrap_or_default();
            }
            true
        })
    }
}

impl<const SIZE: usize> Default for ByteQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Writer handle for a [`ByteQueue`].
#[derive(Clone, Copy)]
pub struct ByteWriter<'a, const SIZE: usize> {
    queue: &'a ByteQueue<SIZE>,
}

impl<const SIZE: usize> ByteWriter<'_, SIZE> {
    /// Push a received byte.
    pub fn store(&self, byte: u8) -> Result<(), SendError> {
        self.queue.store(byte)
    }

    /// Push every byte of a slice, stopping at the first byte that does not fit.
    pub fn store_all(&self, bytes: &[u8]) -> Result<(), SendError> {
        bytes.iter().try_for_each(|byte| self.queue.store(*byte))
    }
}

/// Reader handle for a [`ByteQueue`].
#[derive(Clone, Copy)]
pub struct ByteReader<'a, const SIZE: usize> {
    queue: &'a ByteQueue<SIZE>,
}

impl<const SIZE: usize> ByteReader<'_, SIZE> {
    /// Pop the oldest byte, if any.
    pub fn read(&self) -> Option<u8> {
        self.queue.read()
    }

    /// Look at the oldest byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.queue.peek()
    }

    /// Number of buffered bytes.
    pub fn available(&self) -> usize {
        self.queue.available()
    }

    /// Pop exactly `out.len()` bytes, or nothing if fewer are buffered.
    pub fn read_exact(&self, out: &mut [u8]) -> bool {
        self.queue.read_exact(out)
    }
}
