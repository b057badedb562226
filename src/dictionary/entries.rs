//! 기본 수화 단어 사전 데이터
//!
//! 기본형(사전형)과 자주 쓰이는 활용형을 KSL 글로스로 매핑합니다.

/// (한국어 단어, KSL 글로스)
pub static BASE_ENTRIES: &[(&str, &str)] = &[
    // 인사말
    ("안녕", "안녕"),
    ("안녕하세요", "안녕"),
    ("안녕하십니까", "안녕"),
    ("반갑습니다", "반갑다"),
    ("반가워요", "반갑다"),
    ("감사합니다", "감사"),
    ("감사", "감사"),
    ("고맙습니다", "감사"),
    ("고마워요", "감사"),
    ("미안합니다", "미안"),
    ("미안해요", "미안"),
    ("죄송합니다", "미안"),
    ("괜찮습니다", "괜찮다"),
    ("괜찮아요", "괜찮다"),
    ("네", "네"),
    ("아니요", "아니다"),
    // 기본 동사
    ("먹다", "먹다"),
    ("먹어요", "먹다"),
    ("먹습니다", "먹다"),
    ("먹었어요", "먹다"),
    ("마시다", "마시다"),
    ("마셔요", "마시다"),
    ("가다", "가다"),
    ("가요", "가다"),
    ("갑니다", "가다"),
    ("오다", "오다"),
    ("와요", "오다"),
    ("옵니다", "오다"),
    ("주다", "주다"),
    ("줘요", "주다"),
    ("받다", "받다"),
    ("보내다", "보내다"),
    ("보내요", "보내다"),
    ("가져오다", "가져오다"),
    ("가져가다", "가져가다"),
    ("들어가다", "들어가다"),
    ("나가다", "나가다"),
    ("들어오다", "들어오다"),
    ("나오다", "나오다"),
    ("보다", "보다"),
    ("봐요", "보다"),
    ("자다", "자다"),
    ("자요", "자다"),
    ("하다", "하다"),
    ("해요", "하다"),
    ("합니다", "하다"),
    ("있다", "있다"),
    ("없다", "없다"),
    ("말하다", "말하다"),
    ("만나다", "만나다"),
    ("배우다", "배우다"),
    ("공부하다", "공부"),
    ("일하다", "일"),
    ("이해하다", "이해"),
    ("도와주다", "돕다"),
    ("원하다", "원하다"),
    ("걷다", "걷다"),
    ("듣다", "듣다"),
    // 기본 명사
    ("밥", "밥"),
    ("식사", "밥"),
    ("물", "물"),
    ("커피", "커피"),
    ("집", "집"),
    ("학교", "학교"),
    ("회사", "회사"),
    ("병원", "병원"),
    ("도서관", "도서관"),
    ("식당", "식당"),
    ("화장실", "화장실"),
    ("사람", "사람"),
    ("친구", "친구"),
    ("가족", "가족"),
    ("엄마", "엄마"),
    ("아빠", "아빠"),
    ("선생님", "선생님"),
    ("나", "나"),
    ("저", "나"),
    ("너", "너"),
    ("도움", "도움"),
    // 형용사
    ("좋다", "좋다"),
    ("좋아요", "좋다"),
    ("나쁘다", "나쁘다"),
    ("예쁘다", "예쁘다"),
    ("아프다", "아프다"),
    ("바쁘다", "바쁘다"),
    ("쉽다", "쉽다"),
    ("어렵다", "어렵다"),
    ("맛있다", "맛있다"),
    ("필요하다", "필요"),
    // 시간
    ("지금", "지금"),
    ("오늘", "오늘"),
    ("내일", "내일"),
    ("어제", "어제"),
    ("아침", "아침"),
    ("저녁", "저녁"),
];
