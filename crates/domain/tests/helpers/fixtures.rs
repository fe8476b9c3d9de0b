//! Captured DNS messages used across the codec tests.

/// Query for luther.edu A with the fixed transaction id.
pub const EXPECTED_LUTHER_QUERY: &[u8] = b"\
    OB\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\x06luther\x03edu\x00\x00\x01\x00\
    \x01";

/// luther.edu A, one answer.
pub const LUTHER_A_RESPONSE: &[u8] = b"\
    \xc7D\x81\x80\x00\x01\x00\x01\x00\x00\x00\x00\x06luther\x03edu\x00\x00\x01\
    \x00\x01\xc0\x0c\x00\x01\x00\x01\x00\x00\x01,\x00\x04\xae\x81\x19\xaa";

/// yahoo.com AAAA, six answers.
pub const YAHOO_AAAA_RESPONSE: &[u8] = b"\
    k\xfb\x81\x80\x00\x01\x00\x06\x00\x00\x00\x00\x05yahoo\x03com\x00\x00\x1c\
    \x00\x01\xc0\x0c\x00\x1c\x00\x01\x00\x00\x04T\x00\x10 \x01I\x98\x00X\x186\
    \x00\x00\x00\x00\x00\x00\x00\x11\xc0\x0c\x00\x1c\x00\x01\x00\x00\x04T\x00\
    \x10 \x01I\x98\x00X\x186\x00\x00\x00\x00\x00\x00\x00\x10\xc0\x0c\x00\x1c\x00\
    \x01\x00\x00\x04T\x00\x10 \x01I\x98\x00D\x04\x1d\x00\x00\x00\x00\x00\x00\x00\
    \x04\xc0\x0c\x00\x1c\x00\x01\x00\x00\x04T\x00\x10 \x01I\x98\x00D\x04\x1d\x00\
    \x00\x00\x00\x00\x00\x00\x03\xc0\x0c\x00\x1c\x00\x01\x00\x00\x04T\x00\x10 \
    \x01I\x98\x00\x0c\x10#\x00\x00\x00\x00\x00\x00\x00\x05\xc0\x0c\x00\x1c\x00\
    \x01\x00\x00\x04T\x00\x10 \x01I\x98\x00\x0c\x10#\x00\x00\x00\x00\x00\x00\x00\
    \x04";

/// luther.edu A with authority and additional sections (answers start at 28).
pub const LUTHER_A_FULL_RESPONSE: &[u8] = b"\
    tH\x81\x80\x00\x01\x00\x01\x00\x03\x00\x01\x06luther\x03edu\x00\x00\x01\x00\
    \x01\xc0\x0c\x00\x01\x00\x01\x00\x00\x01,\x00\x04\xae\x81\x19\xaa\xc0\x0c\
    \x00\x02\x00\x01\x00\x01Q\x80\x00\x10\x05dns-2\x07iastate\xc0\x13\xc0\x0c\
    \x00\x02\x00\x01\x00\x01Q\x80\x00\x0a\x03dns\x03uni\xc0\x13\xc0\x0c\x00\x02\
    \x00\x01\x00\x01Q\x80\x00\x09\x06martin\xc0\x0c\xc0j\x00\x01\x00\x01\x00\x01\
    Q\x80\x00\x04\xc0\xcb\xc4\x14";

/// yahoo.com AAAA with authority and additional sections (answers start at 27).
pub const YAHOO_AAAA_FULL_RESPONSE: &[u8] = b"\
    {\xae\x81\x80\x00\x01\x00\x06\x00\x05\x00\x08\x05yahoo\x03com\x00\x00\x1c\
    \x00\x01\xc0\x0c\x00\x1c\x00\x01\x00\x00\x04\xe9\x00\x10 \x01I\x98\x00D\x04\
    \x1d\x00\x00\x00\x00\x00\x00\x00\x04\xc0\x0c\x00\x1c\x00\x01\x00\x00\x04\xe9\
    \x00\x10 \x01I\x98\x00D\x04\x1d\x00\x00\x00\x00\x00\x00\x00\x03\xc0\x0c\x00\
    \x1c\x00\x01\x00\x00\x04\xe9\x00\x10 \x01I\x98\x00X\x186\x00\x00\x00\x00\x00\
    \x00\x00\x11\xc0\x0c\x00\x1c\x00\x01\x00\x00\x04\xe9\x00\x10 \x01I\x98\x00\
    \x0c\x10#\x00\x00\x00\x00\x00\x00\x00\x04\xc0\x0c\x00\x1c\x00\x01\x00\x00\
    \x04\xe9\x00\x10 \x01I\x98\x00\x0c\x10#\x00\x00\x00\x00\x00\x00\x00\x05\xc0\
    \x0c\x00\x1c\x00\x01\x00\x00\x04\xe9\x00\x10 \x01I\x98\x00X\x186\x00\x00\x00\
    \x00\x00\x00\x00\x10\xc0\x0c\x00\x02\x00\x01\x00\x00s0\x00\x06\x03ns1\xc0\
    \x0c\xc0\x0c\x00\x02\x00\x01\x00\x00s0\x00\x06\x03ns3\xc0\x0c\xc0\x0c\x00\
    \x02\x00\x01\x00\x00s0\x00\x06\x03ns5\xc0\x0c\xc0\x0c\x00\x02\x00\x01\x00\
    \x00s0\x00\x06\x03ns2\xc0\x0c\xc0\x0c\x00\x02\x00\x01\x00\x00s0\x00\x06\x03n\
    s4\xc0\x0c\xc0\xcf\x00\x1c\x00\x01\x00\x00CX\x00\x10 \x01I\x98\x010\x00\x00\
    \x00\x00\x00\x00\x00\x00\x10\x01\xc1\x05\x00\x1c\x00\x01\x00\x00\xda\xdb\x00\
    \x10 \x01I\x98\x01@\x00\x00\x00\x00\x00\x00\x00\x00\x10\x02\xc0\xe1\x00\x1c\
    \x00\x01\x00\x00\xd9\xb0\x00\x10$\x06\x86\x00\x00\xb8\xfe\x03\x00\x00\x00\
    \x00\x00\x00\x10\x03\xc0\xcf\x00\x01\x00\x01\x00\x11f\xdc\x00\x04D\xb4\x83\
    \x10\xc1\x05\x00\x01\x00\x01\x00\x11f\xde\x00\x04D\x8e\xff\x10\xc0\xe1\x00\
    \x01\x00\x01\x00\x0f\xfe\xc3\x00\x04\xcbT\xdd5\xc1\x17\x00\x01\x00\x01\x00\
    \x11\x8ah\x00\x04b\x8a\x0b\x9d\xc0\xf3\x00\x01\x00\x01\x00\x11PF\x00\x04w\
    \xa0\xfdS";

/// Response to the ant A query, id 4783.
pub const ANT_A_RESPONSE: &[u8] = b"\
    \x12\xaf\x81\x00\x00\x01\x00\x02\x00\x00\x00\x00\x03ant\x05cs430\x06luther\
    \x03edu\x00\x00\x01\x00\x01\xc0\x0c\x00\x01\x00\x01\x00\x00\x0e\x10\x00\x04\
    \xb9T\xe0Y\xc0\x0c\x00\x01\x00\x01\x00\x00\x0e\x10\x00\x04\xc7SC\x9e";

/// Response to the ant AAAA query, id 55933.
pub const ANT_AAAA_RESPONSE: &[u8] = b"\
    \xda}\x81\x00\x00\x01\x00\x01\x00\x00\x00\x00\x03ant\x05cs430\x06luther\x03e\
    du\x00\x00\x1c\x00\x01\xc0\x0c\x00\x1c\x00\x01\x00\x00\x0e\x10\x00\x10J\x9ap\
    \xec:\xc0\xc6\x845\x9e\x8d7\x94\x86YY";

/// Question section for ant.cs430.luther.edu A.
pub const ANT_A_QUESTION: &[u8] = b"\
    \x03ant\x05cs430\x06luther\x03edu\x00\x00\x01\x00\x01";

/// Question section for ant.cs430.luther.edu AAAA.
pub const ANT_AAAA_QUESTION: &[u8] = b"\
    \x03ant\x05cs430\x06luther\x03edu\x00\x00\x1c\x00\x01";

/// ant A query, id 14019.
pub const ANT_A_REQUEST: &[u8] = b"\
    6\xc3\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\x03ant\x05cs430\x06luther\x03e\
    du\x00\x00\x01\x00\x01";

/// ant AAAA query, id 27086.
pub const ANT_AAAA_REQUEST: &[u8] = b"\
    i\xce\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\x03ant\x05cs430\x06luther\x03e\
    du\x00\x00\x1c\x00\x01";

/// ant query with QTYPE 3.
pub const ANT_QTYPE_3_REQUEST: &[u8] = b"\
    6\xc3\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\x03ant\x05cs430\x06luther\x03e\
    du\x00\x00\x03\x00\x01";

/// ant A query with QCLASS 3.
pub const ANT_CLASS_3_REQUEST: &[u8] = b"\
    6\xc3\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\x03ant\x05cs430\x06luther\x03e\
    du\x00\x00\x01\x00\x03";

/// zoo.test response whose first answer spells its owner out as literal
/// labels and whose second points back at the question.
pub const ZOO_TEST_LITERAL_OWNER_RESPONSE: &[u8] = b"\
    OB\x81\x80\x00\x01\x00\x02\x00\x00\x00\x00\x03zoo\x04test\x00\x00\x01\x00\x01\
    \x03zoo\x04test\x00\x00\x01\x00\x01\x00\x00\x00\x3c\x00\x04\x0a\x00\x00\x01\
    \xc0\x0c\x00\x1c\x00\x01\x00\x00\x00\x3c\x00\x10\
    \x20\x01\x0d\xb8\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x01";
