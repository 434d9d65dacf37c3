//! Tests for the verification client and poller
