// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Media descriptors, loading, and the frame sources the engine draws from.
//!
//! Decoding and transport belong to the host. The engine asks a
//! [`MediaLoader`] for a [`MediaDescriptor`] and learns the outcome through
//! [`MediaEvent`]s tagged with the [`LoadToken`] of the request.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use loupe_imaging::{FrameId, Size};

/// Broad kind of media, which decides playback and zoom limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// Bitmap still image.
    Raster,
    /// Vector document, rasterized by the host at its natural size.
    Vector,
    /// Possibly animated bitmap image. Playable when it has more than one frame.
    AnimatedImage,
    /// Video stream.
    Video,
}

impl MediaKind {
    /// Guesses the kind from the extension of `path`, ignoring case.
    ///
    /// ```
    /// use loupe_viewport::MediaKind;
    ///
    /// assert_eq!(MediaKind::from_path("scan/page.SVG"), MediaKind::Vector);
    /// assert_eq!(MediaKind::from_path("clip.mp4"), MediaKind::Video);
    /// assert_eq!(MediaKind::from_path("photo.jpeg"), MediaKind::Raster);
    /// ```
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let ends_with = |ext: &str| {
            path.len() >= ext.len()
                && path
                    .get(path.len() - ext.len()..)
                    .is_some_and(|tail| tail.eq_ignore_ascii_case(ext))
        };
        if ends_with(".svg") {
            Self::Vector
        } else if ends_with(".gif") {
            Self::AnimatedImage
        } else if ends_with(".mp4") {
            Self::Video
        } else {
            Self::Raster
        }
    }

    /// Returns `true` for video.
    #[must_use]
    pub fn is_video(self) -> bool {
        self == Self::Video
    }
}

/// What to load.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MediaDescriptor {
    /// Location understood by the host's loader.
    pub url: String,
    /// Media kind.
    pub kind: MediaKind,
}

impl MediaDescriptor {
    /// Creates a descriptor, guessing the kind from the URL.
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let kind = MediaKind::from_path(&url);
        Self { url, kind }
    }

    /// Overrides the guessed kind.
    #[must_use]
    pub fn with_kind(mut self, kind: MediaKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Identifies one load request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadToken(pub u64);

/// Why a load failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadError {
    /// The host cannot decode this kind of media.
    Unsupported,
    /// The transport answered with a non-success status.
    Http {
        /// Status code.
        status: u16,
    },
    /// The payload arrived but could not be decoded.
    Decode(String),
    /// The request was abandoned.
    Aborted,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => write!(f, "unsupported media type"),
            Self::Http { status } => write!(f, "request failed with HTTP status {status}"),
            Self::Decode(reason) => write!(f, "failed to decode media: {reason}"),
            Self::Aborted => write!(f, "load aborted"),
        }
    }
}

impl core::error::Error for LoadError {}

/// Transport controls of playable media.
pub trait Playback {
    /// Current position in seconds.
    fn current_time(&self) -> f64;

    /// Duration in seconds, if known.
    fn duration(&self) -> Option<f64>;

    /// Number of distinct frames, if known.
    fn frame_count(&self) -> Option<u32> {
        None
    }

    /// Returns `true` while playing.
    fn is_playing(&self) -> bool;

    /// Starts or pauses playback.
    fn set_playing(&mut self, playing: bool);

    /// Moves to `time` seconds.
    fn seek(&mut self, time: f64);

    /// Returns `true` when audio is muted.
    fn is_muted(&self) -> bool {
        true
    }

    /// Mutes or unmutes audio.
    fn set_muted(&mut self, _muted: bool) {}
}

/// Decoded media the engine can draw.
pub trait FrameSource {
    /// Size in media pixels.
    fn natural_size(&self) -> Size;

    /// Handle of the frame to draw now.
    fn frame(&self) -> FrameId;

    /// Transport controls, for media that plays.
    fn playback(&self) -> Option<&dyn Playback> {
        None
    }

    /// Mutable transport controls, for media that plays.
    fn playback_mut(&mut self) -> Option<&mut dyn Playback> {
        None
    }
}

/// Outcome of a load request, delivered by the host.
pub enum MediaEvent {
    /// Bytes are arriving.
    Progress {
        /// Request this event belongs to.
        token: LoadToken,
        /// Completed fraction in `[0, 1]`.
        fraction: f64,
    },
    /// The media decoded successfully.
    Loaded {
        /// Request this event belongs to.
        token: LoadToken,
        /// Decoded media.
        source: Box<dyn FrameSource>,
    },
    /// The load failed.
    Failed {
        /// Request this event belongs to.
        token: LoadToken,
        /// Failure reason.
        error: LoadError,
    },
}

impl MediaEvent {
    /// Returns the token of the request this event belongs to.
    #[must_use]
    pub fn token(&self) -> LoadToken {
        match self {
            Self::Progress { token, .. } | Self::Loaded { token, .. } | Self::Failed { token, .. } => {
                *token
            }
        }
    }
}

impl fmt::Debug for MediaEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Progress { token, fraction } => f
                .debug_struct("Progress")
                .field("token", token)
                .field("fraction", fraction)
                .finish(),
            Self::Loaded { token, source } => f
                .debug_struct("Loaded")
                .field("token", token)
                .field("natural_size", &source.natural_size())
                .field("playable", &source.playback().is_some())
                .finish(),
            Self::Failed { token, error } => f
                .debug_struct("Failed")
                .field("token", token)
                .field("error", error)
                .finish(),
        }
    }
}

/// Host collaborator that fetches and decodes media.
///
/// Results are reported back with
/// [`ViewportEngine::handle_media_event`](crate::ViewportEngine::handle_media_event).
pub trait MediaLoader {
    /// Starts loading `descriptor`. Every event for it must carry `token`.
    fn request(&mut self, token: LoadToken, descriptor: &MediaDescriptor);
}

impl<F: FnMut(LoadToken, &MediaDescriptor)> MediaLoader for F {
    fn request(&mut self, token: LoadToken, descriptor: &MediaDescriptor) {
        self(token, descriptor);
    }
}

/// Approximates load progress from byte counts.
///
/// When the total is unknown a nominal megabyte is assumed and the fraction
/// wraps, so the ring keeps moving.
#[must_use]
pub fn progress_fraction(loaded: u64, total: Option<u64>) -> f64 {
    let total = total.filter(|&t| t > 0).unwrap_or(1_000_000);
    (loaded % total) as f64 / total as f64
}
