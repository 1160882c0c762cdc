use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::slice;

/// A raw heap buffer of uninitialized slots. This type owns the allocation and nothing else:
/// tracking which slots hold live values, and dropping them, is entirely the caller's job.
/// Dereferences to a `[MaybeUninit<T>]` covering the whole capacity so slot manipulation can be
/// written as safe code.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<MaybeUninit<T>>,
    cap: usize,
    _phantom: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// Allocates a buffer with exactly `cap` slots. Zero-sized element types never allocate.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> RawBuf<T> {
        let layout = Self::make_layout(cap);

        RawBuf {
            ptr: Self::make_ptr(layout),
            cap,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of slots in the buffer.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Reallocates the buffer to hold exactly `new_cap` slots. Slot contents up to
    /// `min(cap, new_cap)` are preserved bitwise; the caller must ensure that any live values
    /// above `new_cap` were taken out beforehand, as they are not dropped here.
    ///
    /// # Panics
    /// Panics if the new memory layout size exceeds [`isize::MAX`].
    pub fn realloc(&mut self, new_cap: usize) {
        if size_of::<T>() == 0 || new_cap == self.cap {
            // Zero-sized types are never allocated, so only the bookkeeping changes.
            self.cap = new_cap;
            return;
        }

        let old_layout = Self::make_layout(self.cap);
        let new_layout = Self::make_layout(new_cap);

        let raw_ptr: *mut MaybeUninit<T> = if old_layout.size() == 0 {
            // Nothing was allocated yet; start fresh.
            Self::make_ptr(new_layout).as_ptr()
        } else if new_layout.size() == 0 {
            // SAFETY: The existing allocation was made with old_layout in the global allocator.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) };
            NonNull::dangling().as_ptr()
        } else {
            // SAFETY: The existing allocation was made with old_layout in the global allocator,
            // and new_layout's size is non-zero and at most isize::MAX.
            unsafe {
                alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()).cast()
            }
        };

        self.ptr = NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout));
        self.cap = new_cap;
    }

    /// A helper to create a [`Layout`] for `cap` slots of `MaybeUninit<T>`.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    fn make_layout(cap: usize) -> Layout {
        Layout::array::<MaybeUninit<T>>(cap).expect("Capacity overflow!")
    }

    /// A helper to allocate for the provided [`Layout`], returning a dangling pointer for a
    /// zero-sized layout and diverting through [`alloc::handle_alloc_error`] on failure.
    fn make_ptr(layout: Layout) -> NonNull<MaybeUninit<T>> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() },
            )
            .unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        let layout = Self::make_layout(self.cap);

        // Slots are MaybeUninit, so there are no element drops to run here; any live values are
        // the caller's responsibility and have already been handled.
        if layout.size() != 0 {
            // SAFETY: ptr was allocated in the global allocator with this layout. Zero-sized
            // layouts are never allocated and are guarded against deallocation.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Deref for RawBuf<T> {
    type Target = [MaybeUninit<T>];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held allocation uses Layout::array(cap), so it is valid and properly
        // aligned for cap slots, and cap * size_of::<T>() never exceeds isize::MAX. MaybeUninit
        // slots are "initialized" by definition.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.cap) }
    }
}

impl<T> DerefMut for RawBuf<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for Deref; the mutable borrow of self prevents aliasing.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.cap) }
    }
}
