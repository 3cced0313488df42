use std::net::{TcpListener, TcpStream};
use std::thread;

use arducam_tof::{Point, PointCloud, PointCloudReceiver, PointCloudSender, PointFilter};

fn cloud(frame: usize) -> PointCloud {
    PointCloud {
        width: 4,
        height: 2,
        points: (0..8)
            .map(|i| Point {
                x: i as f32,
                y: frame as f32,
                z: 0.25 * i as f32,
                confidence: 10.0 * i as f32,
            })
            .collect(),
    }
}

#[test]
fn clouds_cross_a_tcp_connection() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let client = thread::spawn(move || {
        let mut sender = PointCloudSender::new(TcpStream::connect(addr).unwrap());
        for frame in 0..5 {
            sender.send(&cloud(frame)).unwrap();
        }
        // dropping the sender closes the connection
    });

    let (stream, _) = listener.accept().unwrap();
    let received: Vec<PointCloud> = PointCloudReceiver::new(stream)
        .collect::<Result<_, _>>()
        .unwrap();
    client.join().unwrap();

    assert_eq!(received.len(), 5);
    for (frame, cloud_in) in received.iter().enumerate() {
        assert_eq!(cloud_in, &cloud(frame));
    }
}

#[test]
fn receiver_side_filtering() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let client = thread::spawn(move || {
        PointCloudSender::new(TcpStream::connect(addr).unwrap())
            .send(&cloud(0))
            .unwrap();
    });

    let (stream, _) = listener.accept().unwrap();
    let mut receiver = PointCloudReceiver::new(stream);
    let mut received = receiver.recv().unwrap().expect("one cloud");
    client.join().unwrap();
    assert!(receiver.recv().unwrap().is_none());

    received.retain(&PointFilter {
        min_depth: Some(0.5),
        max_depth: Some(1.5),
        confidence: Some(30.0..=60.0),
    });
    let kept: Vec<f32> = received.iter().map(|p| p.x).collect();
    assert_eq!(kept, vec![3.0, 4.0, 5.0, 6.0]);
}
