mod common;

mod tests {
    use ambilight_firmware::config::SyncPolicy;
    use ambilight_firmware::protocol::{UploadError, encode_settings, upload_settings};
    use ambilight_firmware::{
        ByteQueue, Configuration, ControlCommand, ControlDecoder, Mode, Rgb, SendError,
        StreamDecoder,
    };

    use super::common::{BrokenSink, VecSink, frame};

    #[test]
    fn test_control_pairs_decode() {
        let queue: ByteQueue<16> = ByteQueue::new();
        queue.writer().store_all(&[1, 30, 10, 50, 22, 7]).unwrap();
        let mut decoder = ControlDecoder::new(queue.reader());

        assert_eq!(decoder.poll(), Some(ControlCommand::SetMode(Mode::Off)));
        assert_eq!(decoder.poll(), Some(ControlCommand::SetLightLevel(50)));
        assert_eq!(decoder.poll(), Some(ControlCommand::SetBlue(7)));
        assert_eq!(decoder.poll(), None);
    }

    #[test]
    fn test_control_waits_for_value_byte() {
        let queue: ByteQueue<16> = ByteQueue::new();
        queue.store(10).unwrap();
        let mut decoder = ControlDecoder::new(queue.reader());

        assert_eq!(decoder.poll(), None);
        assert_eq!(queue.available(), 1);

        queue.store(80).unwrap();
        assert_eq!(decoder.poll(), Some(ControlCommand::SetLightLevel(80)));
    }

    #[test]
    fn test_unknown_command_byte_is_dropped_alone() {
        let queue: ByteQueue<16> = ByteQueue::new();
        queue.writer().store_all(&[99, 20, 128]).unwrap();
        let mut decoder = ControlDecoder::new(queue.reader());

        assert_eq!(decoder.poll(), Some(ControlCommand::SetRed(128)));
        assert_eq!(queue.available(), 0);
    }

    #[test]
    fn test_consecutive_unknown_bytes_are_dropped_one_by_one() {
        let queue: ByteQueue<16> = ByteQueue::new();
        queue.writer().store_all(&[99, 98, 10, 50, 97, 21]).unwrap();
        let mut decoder = ControlDecoder::new(queue.reader());

        assert_eq!(decoder.poll(), Some(ControlCommand::SetLightLevel(50)));
        assert_eq!(decoder.poll(), None);
        // The green command waits for its value
        assert_eq!(queue.available(), 1);
        assert_eq!(queue.peek(), Some(21));
    }

    #[test]
    fn test_unknown_mode_value_is_kept() {
        assert_eq!(
            ControlCommand::decode(1, 77),
            Some(ControlCommand::SetMode(Mode::Unknown(77)))
        );
        assert_eq!(ControlCommand::decode(5, 0), Some(ControlCommand::SaveSettings));
        assert_eq!(ControlCommand::decode(200, 0), Some(ControlCommand::UploadSettings));
        assert_eq!(ControlCommand::decode(2, 0), None);
    }

    #[test]
    fn test_stream_frame_decodes() {
        let queue: ByteQueue<32> = ByteQueue::new();
        queue
            .writer()
            .store_all(&frame(&[(1, 2, 3), (4, 5, 6)]))
            .unwrap();
        let mut decoder = StreamDecoder::new(queue.reader(), SyncPolicy::DropByte);

        assert!(decoder.is_ready::<2>());
        assert_eq!(
            decoder.poll::<2>(),
            Some([Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)])
        );
        assert_eq!(queue.available(), 0);
    }

    #[test]
    fn test_short_stream_consumes_nothing() {
        let queue: ByteQueue<32> = ByteQueue::new();
        let bytes = frame(&[(1, 2, 3), (4, 5, 6)]);
        queue.writer().store_all(&bytes[..6]).unwrap();
        let mut decoder = StreamDecoder::new(queue.reader(), SyncPolicy::DropByte);

        assert!(!decoder.is_ready::<2>());
        assert_eq!(decoder.poll::<2>(), None);
        assert_eq!(queue.available(), 6);
    }

    #[test]
    fn test_drop_byte_resyncs_one_byte_per_poll() {
        let queue: ByteQueue<32> = ByteQueue::new();
        queue.writer().store_all(&[7, 8]).unwrap();
        queue.writer().store_all(&frame(&[(9, 9, 9), (1, 1, 1)])).unwrap();
        let mut decoder = StreamDecoder::new(queue.reader(), SyncPolicy::DropByte);

        assert_eq!(decoder.poll::<2>(), None);
        assert_eq!(queue.available(), 8);
        assert_eq!(decoder.poll::<2>(), None);
        assert_eq!(
            decoder.poll::<2>(),
            Some([Rgb::new(9, 9, 9), Rgb::new(1, 1, 1)])
        );
    }

    #[test]
    fn test_scan_for_marker_skips_garbage() {
        let queue: ByteQueue<32> = ByteQueue::new();
        queue.writer().store_all(&[7, 8, 3]).unwrap();
        queue.writer().store_all(&frame(&[(9, 9, 9), (1, 1, 1)])).unwrap();
        let mut decoder = StreamDecoder::new(queue.reader(), SyncPolicy::ScanForMarker);

        assert_eq!(
            decoder.poll::<2>(),
            Some([Rgb::new(9, 9, 9), Rgb::new(1, 1, 1)])
        );
    }

    #[test]
    fn test_full_queue_rejects_byte() {
        let queue: ByteQueue<2> = ByteQueue::new();
        queue.store(1).unwrap();
        queue.store(2).unwrap();

        assert_eq!(queue.store(3), Err(SendError(3)));
        assert_eq!(queue.read(), Some(1));
    }

    #[test]
    fn test_read_exact_is_all_or_nothing() {
        let queue: ByteQueue<8> = ByteQueue::new();
        queue.writer().store_all(&[1, 2]).unwrap();
        let mut out = [0u8; 3];

        assert!(!queue.read_exact(&mut out));
        assert_eq!(queue.available(), 2);

        queue.store(3).unwrap();
        assert!(queue.read_exact(&mut out));
        assert_eq!(out, [1, 2, 3]);
    }

    #[test]
    fn test_settings_upload() {
        let config = Configuration::new(Mode::Demo, 40, Rgb::new(1, 2, 3));
        assert_eq!(encode_settings(&config), [1, 40, 10, 40, 20, 1, 21, 2, 22, 3]);

        let mut sink = VecSink::default();
        upload_settings(&mut sink, &Configuration::default()).unwrap();

        assert_eq!(sink.bytes, vec![1, 10, 10, 100, 20, 255, 21, 255, 22, 255]);
        assert_eq!(sink.flushes, 1);
    }

    #[test]
    fn test_settings_upload_failure() {
        assert_eq!(
            upload_settings(&mut BrokenSink, &Configuration::default()),
            Err(UploadError)
        );
    }
}
