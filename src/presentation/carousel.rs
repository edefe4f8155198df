//! 이미지 캐러셀 인덱스 계산
//!
//! 이전/다음 이동은 양 끝에서 반대편으로 넘어갑니다:
//! `index' = (index + delta + length) mod length`.

use serde::Serialize;

/// `index`에서 `delta`만큼 이동한 순환 인덱스를 반환합니다.
///
/// 길이가 0이면 항상 0입니다. `delta`의 크기가 길이보다 커도 올바르게 감깁니다.
pub fn step_index(index: usize, delta: isize, length: usize) -> usize {
    if length == 0 {
        return 0;
    }

    let length = length as i64;
    (index as i64 + delta as i64).rem_euclid(length) as usize
}

pub fn next_index(index: usize, length: usize) -> usize {
    step_index(index, 1, length)
}

pub fn previous_index(index: usize, length: usize) -> usize {
    step_index(index, -1, length)
}

/// 갤러리 화면 상태
///
/// 서버 렌더링 페이지에서 `?image=` 쿼리로 현재 이미지를 고르고,
/// 이전/다음 링크에 쓸 인덱스를 함께 내려줍니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryView {
    pub images: Vec<String>,
    pub current: usize,
    pub previous: usize,
    pub next: usize,
    pub total: usize,
}

impl GalleryView {
    /// 요청한 인덱스가 범위를 벗어나면 순환시켜 맞춥니다.
    pub fn new(images: Vec<String>, requested: Option<usize>) -> Self {
        let total = images.len();
        let current = step_index(requested.unwrap_or(0), 0, total);

        Self {
            previous: previous_index(current, total),
            next: next_index(current, total),
            current,
            total,
            images,
        }
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_from_first_wraps_to_last() {
        assert_eq!(previous_index(0, 5), 4);
    }

    #[test]
    fn test_next_from_last_wraps_to_first() {
        assert_eq!(next_index(4, 5), 0);
    }

    #[test]
    fn test_step_inside_range() {
        assert_eq!(next_index(1, 5), 2);
        assert_eq!(previous_index(3, 5), 2);
    }

    #[test]
    fn test_large_deltas_wrap() {
        assert_eq!(step_index(2, 11, 5), 3);
        assert_eq!(step_index(2, -11, 5), 1);
    }

    #[test]
    fn test_empty_gallery_is_always_zero() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(previous_index(3, 0), 0);

        let view = GalleryView::new(vec![], Some(2));
        assert_eq!(view.current, 0);
        assert_eq!(view.current_image(), None);
    }

    #[test]
    fn test_gallery_view_links() {
        let images: Vec<String> = (0..5).map(|i| format!("{}.jpg", i)).collect();

        let first = GalleryView::new(images.clone(), None);
        assert_eq!((first.previous, first.current, first.next), (4, 0, 1));

        let overflow = GalleryView::new(images, Some(7));
        assert_eq!(overflow.current, 2);
        assert_eq!(overflow.current_image(), Some("2.jpg"));
    }
}
